//! Shared scaffolding for repository tests: a throwaway SQLite database
//! with migrations applied and a writer actor running.

use tempfile::TempDir;

use atlas_core::countries::CountryUpsert;
use atlas_storage_sqlite::{create_pool, run_migrations, spawn_writer, DbPool, WriteHandle};

pub struct TestDb {
    pub pool: DbPool,
    pub writer: WriteHandle,
    // Held so the directory outlives the pool.
    _dir: TempDir,
}

/// Must run inside a tokio runtime; the writer actor is a spawned task.
pub fn test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("atlas-test.db");
    let pool = create_pool(path.to_str().expect("utf-8 temp path")).expect("pool");
    run_migrations(&pool).expect("migrations");
    let writer = spawn_writer(pool.clone());
    TestDb {
        pool,
        writer,
        _dir: dir,
    }
}

pub fn upsert_record(name: &str, population: i64) -> CountryUpsert {
    CountryUpsert {
        name: name.to_string(),
        capital: None,
        region: None,
        population,
        currency_code: None,
        exchange_rate: None,
        estimated_gdp: None,
        flag_url: None,
    }
}
