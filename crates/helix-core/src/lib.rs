//! Helix Core -- sequence table validation, run scanning, and classification.
//!
//! This crate holds the pure algorithmic heart of Helix Local: the validated
//! [`Grid`](grid::Grid) type, the directional run scanner, and the classifier
//! that combines scanner results into a binary [`Verdict`]. Nothing in this
//! crate performs I/O; persistence and transport live in `helix-store` and
//! `helix-api`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod classifier;
pub mod grid;
pub mod scan;

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// The binary classification outcome for a sequence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// At least two qualifying runs were found anywhere in the grid.
    Flagged,
    /// Fewer than two qualifying runs; nothing remarkable about the table.
    Ordinary,
}

impl Verdict {
    /// Returns the stable string label used as the tagged-string
    /// representation in the backing store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flagged => "flagged",
            Self::Ordinary => "ordinary",
        }
    }

    /// Returns `true` for [`Verdict::Flagged`].
    #[must_use]
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when decoding a verdict label that is neither `"flagged"`
/// nor `"ordinary"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown verdict label '{0}'")]
pub struct ParseVerdictError(pub String);

impl FromStr for Verdict {
    type Err = ParseVerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flagged" => Ok(Self::Flagged),
            "ordinary" => Ok(Self::Ordinary),
            other => Err(ParseVerdictError(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tracing / Logging
// ---------------------------------------------------------------------------

/// Error returned when the global tracing subscriber cannot be installed
/// (i.e. [`init_tracing`] was called more than once in the same process).
#[derive(Debug, thiserror::Error)]
#[error("tracing initialization error: {0}")]
pub struct TracingInitError(String);

/// Initialize structured tracing with the given verbosity level.
///
/// `verbose` selects TRACE, `quiet` selects ERROR, otherwise INFO.
/// `json_output` switches from human-readable compact lines to JSON lines.
/// The `RUST_LOG` environment variable, when set, takes precedence over the
/// programmatic level selection so operators can fine-tune per-module
/// verbosity without recompiling.
///
/// # Errors
///
/// Returns [`TracingInitError`] if the global subscriber has already been set.
pub fn init_tracing(verbose: bool, quiet: bool, json_output: bool) -> Result<(), TracingInitError> {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose {
        "trace"
    } else if quiet {
        "error"
    } else {
        "info"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json_output {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init()
            .map_err(|e| TracingInitError(e.to_string()))
    } else {
        fmt()
            .compact()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init()
            .map_err(|e| TracingInitError(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
