//! The `stats` subcommand -- aggregate verdict counts.
//!
//! Read-only with respect to the classification path: queries the configured
//! verdict store for total counts per verdict and prints them as JSON.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use helix_store::sqlite::SqliteVerdictStore;
use helix_store::VerdictStore;

use crate::config::resolve_db_path;
use crate::ExitCode;

// ---------------------------------------------------------------------------
// StatsArgs
// ---------------------------------------------------------------------------

/// Show aggregate verdict statistics.
#[derive(Debug, clap::Args)]
pub struct StatsArgs {
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

/// Executes the `stats` subcommand.
pub fn execute(args: StatsArgs) -> Result<ExitCode, anyhow::Error> {
    let _ = helix_core::init_tracing(args.verbose, args.quiet, false);

    let db_path = resolve_db_path(args.db);
    let store = match SqliteVerdictStore::open(&db_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("helix: {e}");
            return Ok(ExitCode::StoreUnavailable);
        }
    };

    let stats = match store.stats() {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("helix: {e}");
            return Ok(ExitCode::StoreUnavailable);
        }
    };
    info!(
        flagged = stats.count_flagged,
        ordinary = stats.count_ordinary,
        "stats retrieved"
    );

    let report = serde_json::to_string_pretty(&stats).context("failed to serialize stats")?;
    println!("{report}");
    Ok(ExitCode::Ordinary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
