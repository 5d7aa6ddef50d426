//! System status domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The singleton system aggregate: exactly one row with a fixed identity.
///
/// `last_refreshed_at` is None only before the first ever successful
/// refresh. After a full refresh both fields are recomputed from storage
/// truth rather than drifted incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub total_countries: i64,
    pub last_refreshed_at: Option<DateTime<Utc>>,
}
