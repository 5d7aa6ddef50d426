//! Country repository and service traits.
//!
//! These traits define the contract for country record operations without
//! any database-specific types, allowing for different storage
//! implementations and for deterministic doubles in engine tests.

use async_trait::async_trait;

use super::countries_model::{Country, CountryFilters, CountryUpsert};
use crate::errors::Result;

/// Trait defining the contract for country record persistence.
///
/// All name-keyed operations compare case-insensitively.
#[async_trait]
pub trait CountryRepositoryTrait: Send + Sync {
    /// Insert-or-update keyed by case-insensitive name.
    ///
    /// When a row with the same name (ignoring case) exists, every field
    /// is overwritten in place on that row's identity and its refresh
    /// timestamp is renewed; otherwise a new row is inserted. Each upsert
    /// is atomic with respect to concurrent upserts of the same name.
    async fn upsert(&self, record: CountryUpsert) -> Result<Country>;

    /// List records matching the filters, in the requested order.
    fn list(&self, filters: &CountryFilters) -> Result<Vec<Country>>;

    /// Exact case-insensitive lookup.
    fn get_by_name(&self, name: &str) -> Result<Option<Country>>;

    /// Case-insensitive delete. Returns whether a row was actually
    /// removed, so the boundary can discriminate a 404.
    async fn delete_by_name(&self, name: &str) -> Result<bool>;
}

/// Trait defining the contract for the country query/delete service.
#[async_trait]
pub trait CountryServiceTrait: Send + Sync {
    /// List records, normalizing filter values first.
    fn list_countries(&self, filters: &CountryFilters) -> Result<Vec<Country>>;

    /// Fetch one record by name or fail with a not-found error.
    fn get_country(&self, name: &str) -> Result<Country>;

    /// Delete one record by name, adjusting the status counter.
    async fn delete_country(&self, name: &str) -> Result<()>;
}
