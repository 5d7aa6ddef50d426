//! Country repository (Diesel/SQLite).

mod model;
mod repository;

pub use model::CountryRow;
pub use repository::CountryRepository;
