//! # glossa CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity flags map onto tracing env filters.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use glossa_cli::bundle::{run_bundle, BundleArgs};
use glossa_cli::validate::{run_validate, ValidateArgs};

/// Glossa content toolchain
///
/// Validates hierarchical content trees (workspace catalogs, paginated
/// section indexes, content packs) and resolves bundle definitions into
/// deterministic, ordered export manifests.
#[derive(Parser, Debug)]
#[command(name = "glossa", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a content tree against schema, reference, pagination, and
    /// localization rules.
    Validate(ValidateArgs),

    /// Resolve bundle definitions against a content tree.
    Bundle(BundleArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Bundle(args) => run_bundle(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
