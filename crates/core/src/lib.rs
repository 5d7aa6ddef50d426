//! Atlas Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the country data service:
//! the country record model, the refresh (reconciliation) engine with its
//! currency resolution and GDP estimation steps, and the system status
//! tracker. It is database-agnostic and defines repository traits that
//! are implemented by the `atlas-storage-sqlite` crate.

pub mod constants;
pub mod countries;
pub mod errors;
pub mod refresh;
pub mod status;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
