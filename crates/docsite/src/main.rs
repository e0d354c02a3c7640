//! docsite CLI - versioned documentation site configuration.
//!
//! Provides commands for:
//! - `build`: Assemble the site config and write it as JSON
//! - `check`: Validate manifest, config and locales without writing
//! - `nav`: Print one locale's version navigation

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, NavArgs};
use output::Output;

/// docsite - Versioned documentation site configuration.
#[derive(Parser)]
#[command(name = "docsite", version, about)]
struct Cli {
    /// Enable verbose output (INFO logging).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the site configuration and write it as JSON.
    Build(BuildArgs),
    /// Validate the manifest and configuration without writing output.
    Check(CheckArgs),
    /// Print the version navigation of one locale as JSON.
    Nav(NavArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG (ERROR when unset)
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
