//! End-to-end tests for the classification sequence: parse -> validate ->
//! fingerprint -> lookup -> scan -> persist, including store-failure
//! behavior on both the lookup and the insert path.

use helix_api::{handle_classify, ClassificationService, ClassifyError, VerdictSource};
use helix_core::Verdict;
use helix_store::fingerprint::fingerprint;
use helix_store::memory::InMemoryVerdictStore;
use helix_store::sqlite::SqliteVerdictStore;
use helix_store::{StoreError, VerdictStats, VerdictStore};

fn rows(rows: &[&str]) -> Vec<String> {
    rows.iter().map(|r| (*r).to_string()).collect()
}

// ---------------------------------------------------------------------------
// Failure-injecting store
// ---------------------------------------------------------------------------

/// Store wrapper that fails lookups and/or inserts on demand.
struct FlakyStore {
    inner: InMemoryVerdictStore,
    fail_lookup: bool,
    fail_insert: bool,
}

impl FlakyStore {
    fn new(fail_lookup: bool, fail_insert: bool) -> Self {
        Self {
            inner: InMemoryVerdictStore::new(),
            fail_lookup,
            fail_insert,
        }
    }
}

impl VerdictStore for FlakyStore {
    fn lookup(&self, fingerprint: &str) -> Result<Option<Verdict>, StoreError> {
        if self.fail_lookup {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        self.inner.lookup(fingerprint)
    }

    fn insert(&self, fingerprint: &str, verdict: Verdict, rows: &[String]) -> Result<(), StoreError> {
        if self.fail_insert {
            return Err(StoreError::Unavailable("connection reset".to_string()));
        }
        self.inner.insert(fingerprint, verdict, rows)
    }

    fn stats(&self) -> Result<VerdictStats, StoreError> {
        self.inner.stats()
    }
}

// ---------------------------------------------------------------------------
// Store failure behavior
// ---------------------------------------------------------------------------

#[test]
fn lookup_failure_aborts_the_request() {
    let service = ClassificationService::new(FlakyStore::new(true, false));

    let err = service
        .classify(rows(&["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"]))
        .unwrap_err();

    assert!(matches!(err, ClassifyError::Store(StoreError::Unavailable(_))));
    // The scanner must not run when the prior verdict is unknowable.
    assert_eq!(service.scans_performed(), 0);
}

#[test]
fn lookup_failure_maps_to_server_error() {
    let service = ClassificationService::new(FlakyStore::new(true, false));
    let body = r#"{"rows": ["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"]}"#;

    let response = handle_classify(body, &service);
    assert_eq!(response.status, 500);
}

#[test]
fn insert_failure_degrades_but_returns_the_verdict() {
    let service = ClassificationService::new(FlakyStore::new(false, true));

    let result = service
        .classify(rows(&["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"]))
        .unwrap();

    assert_eq!(result.verdict, Verdict::Ordinary);
    assert_eq!(result.source, VerdictSource::Computed);
    assert!(!result.persisted);
}

#[test]
fn insert_failure_still_maps_to_the_verdict_status() {
    let service = ClassificationService::new(FlakyStore::new(false, true));
    let body = r#"{"rows": ["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"]}"#;

    // Degrade-and-log: persistence loss never changes the response.
    assert_eq!(handle_classify(body, &service).status, 200);
}

#[test]
fn unpersisted_verdict_is_recomputed_on_retry() {
    let service = ClassificationService::new(FlakyStore::new(false, true));
    let table = rows(&["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"]);

    let first = service.classify(table.clone()).unwrap();
    let second = service.classify(table).unwrap();

    // Nothing was persisted, so the second request scans again -- and the
    // deterministic scanner reaches the same verdict.
    assert_eq!(first.verdict, second.verdict);
    assert_eq!(second.source, VerdictSource::Computed);
    assert_eq!(service.scans_performed(), 2);
}

// ---------------------------------------------------------------------------
// Determinism and the at-most-once guarantee
// ---------------------------------------------------------------------------

#[test]
fn same_table_is_scanned_at_most_once() {
    let service = ClassificationService::new(InMemoryVerdictStore::new());
    let table = rows(&[
        "ATCGAAA", "TTGATGA", "GTACCCG", "AAATAAG", "AATTGGG", "AAACCCG", "GTTAAAA",
    ]);

    for _ in 0..5 {
        let result = service.classify(table.clone()).unwrap();
        assert_eq!(result.verdict, Verdict::Flagged);
    }
    assert_eq!(service.scans_performed(), 1);
}

#[test]
fn pre_seeded_verdict_is_trusted_over_recomputation() {
    // The store is authoritative: an existing entry short-circuits the scan
    // even when the scanner would disagree.
    let store = InMemoryVerdictStore::new();
    let table = rows(&["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"]);
    store
        .insert(&fingerprint(&table), Verdict::Flagged, &table)
        .unwrap();

    let service = ClassificationService::new(store);
    let result = service.classify(table).unwrap();

    assert_eq!(result.verdict, Verdict::Flagged);
    assert_eq!(result.source, VerdictSource::Cached);
    assert_eq!(service.scans_performed(), 0);
}

#[test]
fn small_grids_are_always_ordinary() {
    let service = ClassificationService::new(InMemoryVerdictStore::new());
    let tables: Vec<Vec<String>> = vec![
        rows(&["A"]),
        rows(&["AA", "AA"]),
        rows(&["TTT", "TTT", "TTT"]),
        rows(&["CGC", "GCG", "CGC"]),
    ];

    for table in tables {
        let result = service.classify(table).unwrap();
        assert_eq!(result.verdict, Verdict::Ordinary);
    }
}

// ---------------------------------------------------------------------------
// SQLite-backed service
// ---------------------------------------------------------------------------

#[test]
fn sqlite_backed_service_roundtrip() {
    let service = ClassificationService::new(SqliteVerdictStore::in_memory().unwrap());
    let table = rows(&[
        "ATCGAAA", "TTGATGA", "GTACCCG", "AAATAAG", "AATTGGG", "AAACCCG", "GTTAAAA",
    ]);

    let first = service.classify(table.clone()).unwrap();
    let second = service.classify(table).unwrap();

    assert_eq!(first.verdict, Verdict::Flagged);
    assert_eq!(second.source, VerdictSource::Cached);
    assert_eq!(service.scans_performed(), 1);

    let stats = service.stats().unwrap();
    assert_eq!(stats.count_flagged, 1);
    assert_eq!(stats.count_ordinary, 0);
}
