//! The `classify` subcommand -- classifies one sequence table.
//!
//! Reads a request body (JSON with a single `rows` array) from a file or
//! stdin, runs the end-to-end classification sequence against the configured
//! verdict store, prints the result as JSON, and maps the outcome to an exit
//! code.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use helix_api::request::parse_request;
use helix_api::service::{ClassificationService, ClassifyError};
use helix_store::sqlite::SqliteVerdictStore;

use crate::config::resolve_db_path;
use crate::ExitCode;

// ---------------------------------------------------------------------------
// ClassifyArgs
// ---------------------------------------------------------------------------

/// Classify a sequence table.
#[derive(Debug, clap::Args)]
pub struct ClassifyArgs {
    /// Input file containing the request body; reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Path to the verdict database (overrides HELIX_DB_PATH).
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(long, short)]
    pub verbose: bool,

    /// Suppress all non-essential output.
    #[arg(long, short)]
    pub quiet: bool,
}

// ---------------------------------------------------------------------------
// execute
// ---------------------------------------------------------------------------

/// Executes the `classify` subcommand.
///
/// Returns the [`ExitCode`] for the classification outcome. Only I/O faults
/// reading the input surface as hard errors; everything the pipeline itself
/// can report maps to an exit code.
pub fn execute(args: ClassifyArgs) -> Result<ExitCode, anyhow::Error> {
    // Ignore the error if the subscriber is already set (e.g. in tests).
    let _ = helix_core::init_tracing(args.verbose, args.quiet, false);

    let body = read_body(args.input.as_deref())?;

    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("helix: {e}");
            return Ok(ExitCode::InvalidInput);
        }
    };

    let db_path = resolve_db_path(args.db);
    let store = match SqliteVerdictStore::open(&db_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("helix: {e}");
            return Ok(ExitCode::StoreUnavailable);
        }
    };
    info!(db = %db_path.display(), "verdict store open");

    let service = ClassificationService::new(store);
    match service.classify(request.rows) {
        Ok(result) => {
            let report =
                serde_json::to_string(&result).context("failed to serialize classification")?;
            println!("{report}");
            if result.verdict.is_flagged() {
                Ok(ExitCode::Flagged)
            } else {
                Ok(ExitCode::Ordinary)
            }
        }
        Err(ClassifyError::Invalid(e)) => {
            eprintln!("helix: {e}");
            Ok(ExitCode::InvalidInput)
        }
        Err(ClassifyError::Store(e)) => {
            eprintln!("helix: {e}");
            Ok(ExitCode::StoreUnavailable)
        }
    }
}

fn read_body(input: Option<&std::path::Path>) -> Result<String, anyhow::Error> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file '{}'", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("failed to read request body from stdin")?;
            Ok(body)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
