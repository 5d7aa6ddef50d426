//! Country repository implementation.
//!
//! All name-keyed operations go through `lower(name)` so "Japan" and
//! "japan" hit the same row; the unique NOCASE index on `name` backs that
//! up at the schema level. Writes run on the writer actor, which makes
//! the lookup-then-write upsert atomic against concurrent cycles.

use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Double, Text};
use uuid::Uuid;

use atlas_core::countries::{
    Country, CountryFilters, CountryRepositoryTrait, CountryUpsert, SortMode,
};
use atlas_core::errors::Result;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::countries;

use super::model::CountryRow;

diesel::define_sql_function! {
    /// SQLite lower(), used for case-insensitive name matching.
    fn lower(x: Text) -> Text;
}

pub struct CountryRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl CountryRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CountryRepositoryTrait for CountryRepository {
    async fn upsert(&self, record: CountryUpsert) -> Result<Country> {
        record.validate()?;

        self.writer
            .exec(move |conn| {
                let existing: Option<CountryRow> = countries::table
                    .filter(lower(countries::name).eq(record.name.to_lowercase()))
                    .select(CountryRow::as_select())
                    .first::<CountryRow>(conn)
                    .optional()
                    .map_err(StorageError::from)?;

                let now = Utc::now().naive_utc();
                match existing {
                    Some(row) => {
                        // Same identity, every field overwritten, fresh
                        // timestamp.
                        let updated = CountryRow::from_upsert(row.id.clone(), &record, now);
                        diesel::update(countries::table.find(&row.id))
                            .set(&updated)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                        Ok(updated.into())
                    }
                    None => {
                        let inserted =
                            CountryRow::from_upsert(Uuid::new_v4().to_string(), &record, now);
                        diesel::insert_into(countries::table)
                            .values(&inserted)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                        Ok(inserted.into())
                    }
                }
            })
            .await
    }

    fn list(&self, filters: &CountryFilters) -> Result<Vec<Country>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = countries::table.into_boxed();

        if let Some(region) = &filters.region {
            query = query.filter(countries::region.eq(region.clone()));
        }
        if let Some(code) = &filters.currency_code {
            query = query.filter(countries::currency_code.eq(code.clone()));
        }

        query = match filters.sort {
            // The column stores decimal text; cast for a numeric order.
            // SQLite sorts NULLs last under DESC, which is what we want
            // for records without an estimate.
            Some(SortMode::GdpDesc) => {
                query.order(sql::<Double>("CAST(estimated_gdp AS REAL) DESC"))
            }
            Some(SortMode::NameAsc) => query.order(countries::name.asc()),
            None => query,
        };

        let rows = query
            .select(CountryRow::as_select())
            .load::<CountryRow>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Country::from).collect())
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Country>> {
        let mut conn = get_connection(&self.pool)?;

        let row = countries::table
            .filter(lower(countries::name).eq(name.to_lowercase()))
            .select(CountryRow::as_select())
            .first::<CountryRow>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(row.map(Country::from))
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool> {
        let needle = name.to_lowercase();
        self.writer
            .exec(move |conn| {
                let removed =
                    diesel::delete(countries::table.filter(lower(countries::name).eq(needle)))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                Ok(removed > 0)
            })
            .await
    }
}
