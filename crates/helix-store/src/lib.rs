//! Helix Store -- fingerprint-keyed verdict persistence.
//!
//! Maps a deterministic content [`fingerprint`](fingerprint::fingerprint) of
//! a sequence table to a previously computed [`Verdict`], guaranteeing each
//! distinct table is classified by the algorithm at most once. Entries are
//! insert-only: at most one per fingerprint, never updated, never deleted by
//! the core.
//!
//! The [`VerdictStore`] trait is the seam between the classification service
//! and the backing store; [`SqliteVerdictStore`](sqlite::SqliteVerdictStore)
//! is the production implementation and
//! [`InMemoryVerdictStore`](memory::InMemoryVerdictStore) the test seam.

use helix_core::Verdict;

pub mod fingerprint;
pub mod memory;
pub mod sqlite;
pub mod stats;

pub use stats::VerdictStats;

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// Error type for store operations.
///
/// A lookup that finds nothing is `Ok(None)`, not an error; `Unavailable`
/// means the backing store itself could not answer, which is fatal to the
/// classification request in progress.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing-store connectivity lost or the store could not be opened.
    #[error("backing store unavailable: {0}")]
    Unavailable(String),

    /// The store answered, but with data the core cannot use.
    #[error("stored entry corrupt: {0}")]
    Corrupt(String),

    /// Row payload could not be serialized for the audit column.
    #[error("serialization error: {0}")]
    Serialization(String),
}

// ---------------------------------------------------------------------------
// VerdictStore
// ---------------------------------------------------------------------------

/// Key/value contract between the classification service and the backing
/// store.
pub trait VerdictStore {
    /// Looks up a previously stored verdict by fingerprint.
    ///
    /// `Ok(None)` signals "must compute" and is the normal miss path.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`] if the backing store cannot be consulted;
    /// callers must treat this as fatal to the request, since a definitive
    /// prior verdict cannot be ruled out.
    fn lookup(&self, fingerprint: &str) -> Result<Option<Verdict>, StoreError>;

    /// Persists a verdict together with the original rows (kept for
    /// audit/statistics, not consulted by classification).
    ///
    /// Insert-only: a write for a fingerprint that already has an entry is
    /// silently deduplicated, never treated as a conflict. Two concurrent
    /// writers racing on the same fingerprint therefore cannot fail each
    /// other.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`] if the write could not reach the store.
    fn insert(&self, fingerprint: &str, verdict: Verdict, rows: &[String]) -> Result<(), StoreError>;

    /// Read-only aggregate over all stored entries: total counts per verdict.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`] if the aggregate query fails.
    fn stats(&self) -> Result<VerdictStats, StoreError>;
}
