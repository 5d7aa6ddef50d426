//! Countries module - domain models, services, and traits.

mod countries_model;
mod countries_service;
mod countries_traits;

#[cfg(test)]
mod countries_service_tests;

// Re-export the public interface
pub use countries_model::{Country, CountryFilters, CountryUpsert, SortMode};
pub use countries_service::CountryService;
pub use countries_traits::{CountryRepositoryTrait, CountryServiceTrait};
