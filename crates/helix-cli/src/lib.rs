//! Helix CLI -- command-line interface for Helix Local.
//!
//! Provides the `helix` entry point with its `classify` and `stats`
//! subcommands, exit code definitions, and store-path configuration.

use std::fmt;

pub mod commands;
pub mod config;

// ---------------------------------------------------------------------------
// Exit Codes
// ---------------------------------------------------------------------------

/// Helix process exit codes.
///
/// Scripts and pipelines can branch on these without parsing output:
///
/// | Code | Meaning                                        |
/// |------|------------------------------------------------|
/// | 0    | Table classified ordinary (or stats succeeded) |
/// | 1    | Table classified flagged                       |
/// | 2    | Invalid input (parse or validation fault)      |
/// | 3    | Backing store unavailable                      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExitCode {
    /// Table classified ordinary; nothing remarkable found.
    Ordinary = 0,
    /// Table classified flagged.
    Flagged = 1,
    /// Input could not be parsed or failed grid validation.
    InvalidInput = 2,
    /// The verdict store could not be reached.
    StoreUnavailable = 3,
}

impl ExitCode {
    /// Returns the numeric exit code as a `u8`.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns all exit code variants.
    #[must_use]
    pub const fn all() -> &'static [ExitCode] {
        &[
            Self::Ordinary,
            Self::Flagged,
            Self::InvalidInput,
            Self::StoreUnavailable,
        ]
    }

    /// Returns a human-readable description of this exit code.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ordinary => "sequence table classified ordinary",
            Self::Flagged => "sequence table classified flagged",
            Self::InvalidInput => "invalid input (parse or validation fault)",
            Self::StoreUnavailable => "verdict store unavailable",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exit code {} ({})", self.as_u8(), self.description())
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.as_u8())
    }
}

/// Terminate the process with the given [`ExitCode`].
///
/// Logs the exit reason (info for the two classification outcomes, error for
/// faults) and returns the corresponding [`std::process::ExitCode`] for use
/// as a `main` return value.
pub fn terminate(code: ExitCode) -> std::process::ExitCode {
    match code {
        ExitCode::Ordinary | ExitCode::Flagged => {
            tracing::info!(%code, "helix exiting");
        }
        _ => {
            tracing::error!(%code, "helix exiting with error");
        }
    }
    code.into()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_numeric_values() {
        assert_eq!(ExitCode::Ordinary.as_u8(), 0);
        assert_eq!(ExitCode::Flagged.as_u8(), 1);
        assert_eq!(ExitCode::InvalidInput.as_u8(), 2);
        assert_eq!(ExitCode::StoreUnavailable.as_u8(), 3);
    }

    #[test]
    fn exit_code_display() {
        let display = ExitCode::Flagged.to_string();
        assert!(display.contains("1"));
        assert!(display.contains("flagged"));

        let display = ExitCode::StoreUnavailable.to_string();
        assert!(display.contains("3"));
        assert!(display.contains("store unavailable"));
    }

    #[test]
    fn exit_code_all_variants() {
        let all = ExitCode::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], ExitCode::Ordinary);
        assert_eq!(all[3], ExitCode::StoreUnavailable);
    }

    #[test]
    fn exit_code_descriptions_non_empty() {
        for code in ExitCode::all() {
            assert!(!code.description().is_empty());
        }
    }

    #[test]
    fn terminate_returns_process_exit_code() {
        let _ = terminate(ExitCode::Ordinary);
        let _ = terminate(ExitCode::StoreUnavailable);
    }
}
