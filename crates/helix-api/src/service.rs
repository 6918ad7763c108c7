//! The end-to-end classification service.
//!
//! For each request: validate the rows into a grid, compute the content
//! fingerprint, consult the store, and only on a miss run the scanner and
//! persist the result. A given table is therefore classified by the
//! algorithm at most once, no matter how often it is submitted.
//!
//! The backing store is injected at construction; there is no global
//! connection state, and nothing here panics on infrastructure failure.
//!
//! # Write-failure policy
//!
//! A store failure during the *lookup* aborts the request: without the
//! definitive prior verdict the service will not risk an inconsistent
//! recomputation. A store failure during the *insert* degrades instead of
//! failing: the freshly computed verdict is still correct and is returned
//! with `persisted = false`, while the failure is logged at ERROR level.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tracing::{debug, error};

use helix_core::classifier::classify;
use helix_core::grid::{Grid, GridError};
use helix_core::Verdict;
use helix_store::fingerprint::fingerprint;
use helix_store::{StoreError, VerdictStats, VerdictStore};

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Where a verdict came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictSource {
    /// The scanner ran for this request.
    Computed,
    /// The verdict was served from the store; the scanner did not run.
    Cached,
}

/// The outcome of one classification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// The binary verdict.
    pub verdict: Verdict,
    /// Whether the verdict was computed or served from the store.
    pub source: VerdictSource,
    /// `false` only when a freshly computed verdict could not be persisted.
    pub persisted: bool,
}

/// Failures of the classification sequence.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// The rows failed grid validation (client fault).
    #[error(transparent)]
    Invalid(#[from] GridError),

    /// The backing store could not be consulted (server fault, fatal).
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// ClassificationService
// ---------------------------------------------------------------------------

/// Classification orchestrator over an injected [`VerdictStore`].
#[derive(Debug)]
pub struct ClassificationService<S> {
    store: S,
    scans: AtomicU64,
}

impl<S: VerdictStore> ClassificationService<S> {
    /// Creates a service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            scans: AtomicU64::new(0),
        }
    }

    /// The injected store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of times the run scanner has actually executed. Cache hits do
    /// not increment this; diagnostics and tests use it to observe the
    /// at-most-once guarantee.
    pub fn scans_performed(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }

    /// Classifies a sequence table.
    ///
    /// Sequence: validate -> fingerprint -> lookup -> (on miss) scan ->
    /// insert -> return verdict.
    ///
    /// # Errors
    ///
    /// [`ClassifyError::Invalid`] for validation faults,
    /// [`ClassifyError::Store`] when the lookup cannot reach the store. An
    /// insert failure is not an error here; see the module docs.
    pub fn classify(&self, rows: Vec<String>) -> Result<Classification, ClassifyError> {
        let grid = Grid::new(rows)?;
        let fp = fingerprint(grid.rows());

        if let Some(verdict) = self.store.lookup(&fp)? {
            debug!(fingerprint = %fp, %verdict, "serving stored verdict");
            return Ok(Classification {
                verdict,
                source: VerdictSource::Cached,
                persisted: true,
            });
        }

        self.scans.fetch_add(1, Ordering::Relaxed);
        let verdict = classify(&grid);

        let persisted = match self.store.insert(&fp, verdict, grid.rows()) {
            Ok(()) => true,
            Err(e) => {
                error!(fingerprint = %fp, %verdict, error = %e, "failed to persist verdict");
                false
            }
        };

        debug!(fingerprint = %fp, %verdict, persisted, "classification complete");
        Ok(Classification {
            verdict,
            source: VerdictSource::Computed,
            persisted,
        })
    }

    /// Read-only aggregate counts per verdict from the store.
    ///
    /// # Errors
    ///
    /// [`ClassifyError::Store`] when the aggregate query fails.
    pub fn stats(&self) -> Result<VerdictStats, ClassifyError> {
        Ok(self.store.stats()?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
