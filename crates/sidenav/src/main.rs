//! sidenav CLI - Docs-site sidebar toolkit.
//!
//! Provides commands for:
//! - `check`: Validate a sidebars configuration file
//! - `inject`: Inject the analytics snippet into a rendered HTML page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, InjectArgs};
use output::Output;

/// sidenav - Docs-site sidebar toolkit.
#[derive(Parser)]
#[command(name = "sidenav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a sidebars configuration file.
    Check(CheckArgs),
    /// Inject the analytics snippet into an HTML page.
    Inject(InjectArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for the active command
    let verbose = match &cli.command {
        Commands::Check(args) => args.verbose,
        Commands::Inject(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Inject(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
