//! Status repository and service traits.

use async_trait::async_trait;

use super::status_model::SystemStatus;
use crate::errors::Result;

/// Persistence contract for the status singleton.
#[async_trait]
pub trait StatusRepositoryTrait: Send + Sync {
    /// Read the singleton row.
    fn get(&self) -> Result<SystemStatus>;

    /// Recount the stored records and take their maximum refresh
    /// timestamp, writing both into the singleton. This is the
    /// authoritative path; it never drifts.
    async fn recompute(&self) -> Result<SystemStatus>;

    /// Cheap incremental adjustment of the total, floored at zero. Used
    /// by single-record mutation paths; any drift is corrected by the
    /// next `recompute`.
    async fn adjust_total(&self, delta: i64) -> Result<SystemStatus>;
}

/// Service contract for status tracking.
#[async_trait]
pub trait StatusServiceTrait: Send + Sync {
    /// Current singleton value.
    fn current(&self) -> Result<SystemStatus>;

    /// Recompute the aggregate from storage truth (after a refresh).
    async fn recompute_from_storage(&self) -> Result<SystemStatus>;

    /// Bump the total after a single-record insert.
    async fn increment_on_insert(&self) -> Result<SystemStatus>;

    /// Drop the total after a single-record delete.
    async fn decrement_on_delete(&self) -> Result<SystemStatus>;
}
