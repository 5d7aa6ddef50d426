//! SQLite storage implementation for Atlas.
//!
//! This crate provides all database-related functionality using Diesel
//! ORM with SQLite. It implements the repository traits defined in
//! `atlas-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations (embedded)
//! - The single-writer actor that serializes transactional writes
//! - Repository implementations for countries and the status singleton
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel
//! dependencies exist. Everything above it is database-agnostic and works
//! with traits.
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-sqlite (this crate)
//!       │
//!       ▼
//!   SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod countries;
pub mod status;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from atlas-core for convenience
pub use atlas_core::errors::{DatabaseError, Error, Result};
