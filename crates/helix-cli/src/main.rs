use clap::{Parser, Subcommand};

use helix_cli::commands;

/// Helix Local -- sequence table classification service.
#[derive(Parser)]
#[command(name = "helix", about = "Helix Local -- sequence table classification service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a sequence table from a file or stdin.
    Classify(commands::classify::ClassifyArgs),
    /// Show aggregate verdict statistics.
    Stats(commands::stats::StatsArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify(args) => commands::classify::execute(args),
        Commands::Stats(args) => commands::stats::execute(args),
    };

    match result {
        Ok(code) => helix_cli::terminate(code),
        Err(err) => {
            eprintln!("helix: error: {err:#}");
            helix_cli::terminate(helix_cli::ExitCode::InvalidInput)
        }
    }
}
