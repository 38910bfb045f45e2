//! # Glossa CLI library
//!
//! Subcommand handlers for the `glossa` binary. Each handler takes its
//! parsed arguments and returns the process exit code: 0 on success, 1 on
//! validation or resolution failure, and an `anyhow` error for operational
//! problems (unreadable root, unparseable corpus file).

pub mod bundle;
pub mod validate;
