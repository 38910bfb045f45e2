//! # Bundle Subcommand
//!
//! Resolves a bundle definition file (JSON or YAML) against a content tree
//! and prints the resulting item list, either as a human-readable summary
//! or as the full JSON manifest. Resolution failures (invalid definition,
//! empty result) are printed and reported via exit code 1; operational
//! failures (unreadable tree, unparseable definition file) bubble up as
//! errors.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use glossa_catalog::{load_definition_file, load_snapshot};

/// Arguments for the `glossa bundle` subcommand.
#[derive(Args, Debug)]
pub struct BundleArgs {
    #[command(subcommand)]
    pub command: BundleCommand,
}

/// Bundle operations.
#[derive(Subcommand, Debug)]
pub enum BundleCommand {
    /// Resolve a bundle definition against a content tree.
    Resolve(ResolveArgs),
}

/// Arguments for `glossa bundle resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Root directory of the content tree.
    #[arg(long)]
    pub root: PathBuf,

    /// Bundle definition file (JSON or YAML).
    #[arg(long)]
    pub definition: PathBuf,

    /// Print the full JSON manifest instead of a summary.
    #[arg(long)]
    pub json: bool,
}

/// Execute the bundle subcommand.
pub fn run_bundle(args: &BundleArgs) -> Result<u8> {
    match &args.command {
        BundleCommand::Resolve(resolve_args) => run_resolve(resolve_args),
    }
}

fn run_resolve(args: &ResolveArgs) -> Result<u8> {
    let snapshot = load_snapshot(&args.root)
        .with_context(|| format!("failed to load content tree at {}", args.root.display()))?;
    let definition = load_definition_file(&args.definition).with_context(|| {
        format!(
            "failed to load bundle definition at {}",
            args.definition.display()
        )
    })?;

    match glossa_bundle::resolve(&snapshot, &definition) {
        Ok(bundle) => {
            if args.json {
                let manifest = bundle.to_json()?;
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                println!(
                    "Bundle {}: {} item(s)",
                    bundle.definition.id,
                    bundle.items.len()
                );
                for item in &bundle.items {
                    println!(
                        "  [{} {}] {}: {}",
                        item.level, item.kind, item.id, item.title
                    );
                }
            }
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {e}");
            Ok(1)
        }
    }
}
