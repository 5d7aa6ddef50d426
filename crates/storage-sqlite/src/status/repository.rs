//! Status singleton repository implementation.
//!
//! `recompute` is the authoritative path: it recounts the countries table
//! and takes the maximum refresh timestamp inside the same write job, so
//! the singleton can never observe a half-applied cycle.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::dsl::max;
use diesel::prelude::*;

use atlas_core::errors::Result;
use atlas_core::status::{StatusRepositoryTrait, SystemStatus};

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{countries, system_status};

use super::model::{StatusRow, STATUS_ROW_ID};

pub struct StatusRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl StatusRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl StatusRepositoryTrait for StatusRepository {
    fn get(&self) -> Result<SystemStatus> {
        let mut conn = get_connection(&self.pool)?;

        let row: Option<StatusRow> = system_status::table
            .find(STATUS_ROW_ID)
            .select(StatusRow::as_select())
            .first::<StatusRow>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(row.map(SystemStatus::from).unwrap_or_default())
    }

    async fn recompute(&self) -> Result<SystemStatus> {
        self.writer
            .exec(move |conn| {
                let total: i64 = countries::table
                    .count()
                    .get_result(conn)
                    .map_err(StorageError::from)?;

                let latest: Option<NaiveDateTime> = countries::table
                    .select(max(countries::last_refreshed_at))
                    .first(conn)
                    .map_err(StorageError::from)?;

                let row = StatusRow {
                    id: STATUS_ROW_ID,
                    total_countries: total,
                    last_refreshed_at: latest,
                };
                diesel::replace_into(system_status::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(row.into())
            })
            .await
    }

    async fn adjust_total(&self, delta: i64) -> Result<SystemStatus> {
        self.writer
            .exec(move |conn| {
                let existing: Option<StatusRow> = system_status::table
                    .find(STATUS_ROW_ID)
                    .select(StatusRow::as_select())
                    .first::<StatusRow>(conn)
                    .optional()
                    .map_err(StorageError::from)?;

                let mut row = existing.unwrap_or(StatusRow {
                    id: STATUS_ROW_ID,
                    total_countries: 0,
                    last_refreshed_at: None,
                });
                row.total_countries = (row.total_countries + delta).max(0);

                diesel::replace_into(system_status::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(row.into())
            })
            .await
    }
}
