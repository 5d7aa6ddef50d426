//! Status singleton repository (Diesel/SQLite).

mod model;
mod repository;

pub use model::{StatusRow, STATUS_ROW_ID};
pub use repository::StatusRepository;
