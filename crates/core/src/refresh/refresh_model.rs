//! Refresh cycle result types.

use serde::{Deserialize, Serialize};

/// Aggregate result of one refresh cycle's non-abort path.
///
/// This is a normal value, returned with a 200-class outcome even when
/// every record failed (`success == false`). It is deliberately distinct
/// from the abort path, where the country source was unreachable and the
/// cycle returns an error without having written anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshOutcome {
    /// True when at least one record was persisted this cycle.
    pub success: bool,
    /// Number of records successfully upserted.
    pub processed: usize,
    /// One entry per failed record, keyed to the record's name, in input
    /// order.
    pub errors: Vec<String>,
}

impl RefreshOutcome {
    /// Record one successful upsert.
    pub(crate) fn record_success(&mut self) {
        self.processed += 1;
        self.success = true;
    }

    /// Record one failed record without aborting the batch.
    pub(crate) fn record_failure(&mut self, name: &str, message: impl std::fmt::Display) {
        self.errors.push(format!("{}: {}", name, message));
    }

    /// Short log line for the cycle.
    pub fn summary(&self) -> String {
        format!(
            "processed {} records with {} failures",
            self.processed,
            self.errors.len()
        )
    }
}
