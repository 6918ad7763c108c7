//! SQLite-backed verdict store.
//!
//! Schema: one `verdicts` table keyed by fingerprint, holding the verdict
//! label, the original rows serialized as JSON (audit/statistics only), and
//! an insert timestamp. Writes use `INSERT OR IGNORE`: the first verdict for
//! a fingerprint wins and later duplicates -- including concurrent races on
//! the same table -- are dropped without error.
//!
//! The store is constructed explicitly and handed to its consumers; there is
//! no process-global connection.

use std::path::Path;
use std::str::FromStr;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, warn};

use helix_core::Verdict;

use crate::stats::VerdictStats;
use crate::{StoreError, VerdictStore};

/// SQLite-backed [`VerdictStore`].
pub struct SqliteVerdictStore {
    conn: Connection,
}

impl SqliteVerdictStore {
    /// Opens or creates a verdict database at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the database cannot be opened
    /// or the schema cannot be initialized.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError::Unavailable(format!("cannot open verdict store: {e}")))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Creates an in-memory store (useful for testing and ad-hoc runs).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if SQLite cannot allocate the
    /// in-memory database.
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Unavailable(format!("cannot open in-memory store: {e}")))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS verdicts (
                    fingerprint TEXT PRIMARY KEY,
                    verdict     TEXT NOT NULL,
                    rows        TEXT NOT NULL,
                    created_at  INTEGER NOT NULL
                );",
            )
            .map_err(|e| StoreError::Unavailable(format!("init schema: {e}")))
    }

    /// Number of stored entries.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the count query fails.
    pub fn len(&self) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM verdicts", [], |row| row.get(0))
            .map_err(|e| StoreError::Unavailable(format!("count: {e}")))?;
        Ok(count as u64)
    }

    /// Returns `true` if no entries are stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the count query fails.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.len().map(|n| n == 0)
    }
}

impl VerdictStore for SqliteVerdictStore {
    fn lookup(&self, fingerprint: &str) -> Result<Option<Verdict>, StoreError> {
        let label: Option<String> = self
            .conn
            .query_row(
                "SELECT verdict FROM verdicts WHERE fingerprint = ?1",
                params![fingerprint],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError::Unavailable(format!("lookup: {e}")))?;

        match label {
            None => {
                debug!(fingerprint, "verdict miss");
                Ok(None)
            }
            Some(label) => {
                let verdict = Verdict::from_str(&label).map_err(|e| {
                    StoreError::Corrupt(format!("fingerprint {fingerprint}: {e}"))
                })?;
                debug!(fingerprint, %verdict, "verdict hit");
                Ok(Some(verdict))
            }
        }
    }

    fn insert(&self, fingerprint: &str, verdict: Verdict, rows: &[String]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(rows)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let inserted = self
            .conn
            .execute(
                "INSERT OR IGNORE INTO verdicts (fingerprint, verdict, rows, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![fingerprint, verdict.as_str(), payload, timestamp()],
            )
            .map_err(|e| StoreError::Unavailable(format!("insert: {e}")))?;

        if inserted == 0 {
            // Entry already present; insert-only stores never update.
            debug!(fingerprint, "duplicate insert ignored");
        } else {
            debug!(fingerprint, %verdict, "verdict stored");
        }
        Ok(())
    }

    fn stats(&self) -> Result<VerdictStats, StoreError> {
        let mut statement = self
            .conn
            .prepare("SELECT verdict, COUNT(*) FROM verdicts GROUP BY verdict")
            .map_err(|e| StoreError::Unavailable(format!("stats: {e}")))?;

        let rows = statement
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })
            .map_err(|e| StoreError::Unavailable(format!("stats: {e}")))?;

        let mut flagged: u64 = 0;
        let mut ordinary: u64 = 0;
        for row in rows {
            let (label, count) =
                row.map_err(|e| StoreError::Unavailable(format!("stats: {e}")))?;
            match Verdict::from_str(&label) {
                Ok(Verdict::Flagged) => flagged = count as u64,
                Ok(Verdict::Ordinary) => ordinary = count as u64,
                Err(_) => {
                    warn!(label, count, "skipping rows with unknown verdict label");
                }
            }
        }

        Ok(VerdictStats::from_counts(flagged, ordinary))
    }
}

impl std::fmt::Debug for SqliteVerdictStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteVerdictStore").finish_non_exhaustive()
    }
}

/// Unix timestamp in seconds for the `created_at` audit column.
fn timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
