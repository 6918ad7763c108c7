//! Store-path configuration.
//!
//! The verdict database location resolves with CLI > environment > default
//! precedence. A missing environment variable falls back to the default
//! instead of aborting the process; store connectivity itself is checked
//! when the store opens.

use std::path::PathBuf;

/// Environment variable naming the verdict database path.
pub const DB_PATH_ENV: &str = "HELIX_DB_PATH";

/// Default database filename, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "helix.db";

/// Resolves the verdict database path: `--db` flag, then [`DB_PATH_ENV`],
/// then [`DEFAULT_DB_PATH`].
#[must_use]
pub fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    PathBuf::from(DEFAULT_DB_PATH)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-wide, so precedence is covered in a
    // single test to keep it deterministic under parallel execution.
    #[test]
    fn resolution_precedence() {
        std::env::set_var(DB_PATH_ENV, "/tmp/env-helix.db");

        // Flag beats environment.
        let path = resolve_db_path(Some(PathBuf::from("/tmp/flag-helix.db")));
        assert_eq!(path, PathBuf::from("/tmp/flag-helix.db"));

        // Environment beats default.
        let path = resolve_db_path(None);
        assert_eq!(path, PathBuf::from("/tmp/env-helix.db"));

        // Empty environment value falls through to the default.
        std::env::set_var(DB_PATH_ENV, "");
        let path = resolve_db_path(None);
        assert_eq!(path, PathBuf::from(DEFAULT_DB_PATH));

        std::env::remove_var(DB_PATH_ENV);
    }
}
