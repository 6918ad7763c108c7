//! Aggregate verdict statistics.
//!
//! Read-only companion to the classification path: total counts per verdict
//! over everything the store has ever classified, plus the flagged-to-total
//! ratio. Serialized as JSON for the stats surface.

use serde::{Deserialize, Serialize};

/// Counts per verdict over all stored entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerdictStats {
    /// Number of tables classified as flagged.
    pub count_flagged: u64,
    /// Number of tables classified as ordinary.
    pub count_ordinary: u64,
    /// `count_flagged / total`, or `0.0` when the store is empty.
    pub ratio: f64,
}

impl VerdictStats {
    /// Builds stats from raw counts, deriving the ratio.
    #[must_use]
    pub fn from_counts(flagged: u64, ordinary: u64) -> Self {
        let total = flagged + ordinary;
        let ratio = if total > 0 {
            flagged as f64 / total as f64
        } else {
            0.0
        };
        Self {
            count_flagged: flagged,
            count_ordinary: ordinary,
            ratio,
        }
    }

    /// Total number of classified tables.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.count_flagged + self.count_ordinary
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
