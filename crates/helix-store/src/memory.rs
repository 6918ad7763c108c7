//! In-memory verdict store.
//!
//! Same contract as the SQLite store, backed by a `BTreeMap` behind a
//! `Mutex`. This is the substitute-store seam for tests and for callers that
//! do not want persistence; insert-only semantics are preserved (the first
//! verdict for a fingerprint wins).

use std::collections::BTreeMap;
use std::sync::Mutex;

use helix_core::Verdict;

use crate::stats::VerdictStats;
use crate::{StoreError, VerdictStore};

#[derive(Debug, Clone)]
struct Entry {
    verdict: Verdict,
    #[allow(dead_code)] // audit payload, mirrors the SQLite rows column
    rows: Vec<String>,
}

/// Map-backed [`VerdictStore`].
#[derive(Debug, Default)]
pub struct InMemoryVerdictStore {
    entries: Mutex<BTreeMap<String, Entry>>,
}

impl InMemoryVerdictStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().expect("store mutex poisoned").len()
    }

    /// Returns `true` if no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VerdictStore for InMemoryVerdictStore {
    fn lookup(&self, fingerprint: &str) -> Result<Option<Verdict>, StoreError> {
        let entries = self.entries.lock().expect("store mutex poisoned");
        Ok(entries.get(fingerprint).map(|entry| entry.verdict))
    }

    fn insert(&self, fingerprint: &str, verdict: Verdict, rows: &[String]) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("store mutex poisoned");
        entries.entry(fingerprint.to_string()).or_insert_with(|| Entry {
            verdict,
            rows: rows.to_vec(),
        });
        Ok(())
    }

    fn stats(&self) -> Result<VerdictStats, StoreError> {
        let entries = self.entries.lock().expect("store mutex poisoned");
        let flagged = entries
            .values()
            .filter(|entry| entry.verdict.is_flagged())
            .count() as u64;
        let ordinary = entries.len() as u64 - flagged;
        Ok(VerdictStats::from_counts(flagged, ordinary))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
