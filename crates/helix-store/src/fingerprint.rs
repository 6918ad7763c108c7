//! Content fingerprints for sequence tables.
//!
//! The cache key is a SHA-256 digest of the table's rows joined with a fixed
//! separator, rendered as 64 lowercase hex characters. Equal row sequences
//! always produce equal fingerprints; reordering rows changes the digest, and
//! the separator keeps differently-shaped tables with the same concatenation
//! (e.g. `["AB","CD"]` vs `["ABC","D"]`) from colliding.

use sha2::{Digest, Sha256};

/// Separator inserted between rows before hashing. Never a member of the
/// grid alphabet.
pub const ROW_SEPARATOR: u8 = b'\n';

/// Computes the deterministic fingerprint of a row sequence.
#[must_use]
pub fn fingerprint(rows: &[String]) -> String {
    let mut hasher = Sha256::new();
    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            hasher.update([ROW_SEPARATOR]);
        }
        hasher.update(row.as_bytes());
    }
    hex::encode(hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
