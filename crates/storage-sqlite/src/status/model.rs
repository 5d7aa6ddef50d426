//! Database row type for the status singleton.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;

use atlas_core::status::SystemStatus;

/// Fixed identity of the one and only status row.
pub const STATUS_ROW_ID: i32 = 1;

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset, Identifiable)]
#[diesel(table_name = crate::schema::system_status)]
#[diesel(treat_none_as_null = true)]
pub struct StatusRow {
    pub id: i32,
    pub total_countries: i64,
    pub last_refreshed_at: Option<NaiveDateTime>,
}

impl From<StatusRow> for SystemStatus {
    fn from(row: StatusRow) -> Self {
        SystemStatus {
            total_countries: row.total_countries,
            last_refreshed_at: row.last_refreshed_at.map(|ts| Utc.from_utc_datetime(&ts)),
        }
    }
}
