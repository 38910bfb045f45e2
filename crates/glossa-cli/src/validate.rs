//! # Validate Subcommand
//!
//! Loads a content tree from disk and runs the full validation pipeline
//! over it: schema field tables, cross-document references, pagination
//! chains, and localized-string maps. Findings are printed grouped by
//! document; warnings are surfaced but only hard errors fail the run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use glossa_catalog::load_snapshot;
use glossa_validate::{run_validation, ValidationConfig};

/// Arguments for the `glossa validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Root directory of the content tree to validate.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Treat a missing "en" entry in localized maps as a hard error.
    #[arg(long)]
    pub strict_i18n: bool,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when the tree is clean (warnings allowed), 1 when
/// any hard error was found.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let snapshot = load_snapshot(&args.root)
        .with_context(|| format!("failed to load content tree at {}", args.root.display()))?;

    tracing::info!(documents = snapshot.len(), "loaded content tree");

    let config = ValidationConfig {
        require_fallback_locale: args.strict_i18n,
    };
    let report = run_validation(&snapshot, &config);
    println!("{report}");

    if report.has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}
