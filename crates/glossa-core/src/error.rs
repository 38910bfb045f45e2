//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the Glossa workspace. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validators accumulate issue records rather than returning errors;
//!   `GlossaError` covers the boundaries where a run genuinely cannot
//!   continue (unparseable JSON, missing files, bad definitions).
//! - Error messages carry the offending document path wherever one exists.

use thiserror::Error;

/// Top-level error type for the Glossa content engine.
#[derive(Error, Debug)]
pub enum GlossaError {
    /// A document failed structural schema validation.
    #[error("schema validation error: {0}")]
    SchemaValidation(String),

    /// A cross-document reference is dangling or inconsistent.
    #[error("reference error: {0}")]
    Reference(String),

    /// A pagination chain is broken, cyclic, or inconsistent.
    #[error("pagination error: {0}")]
    Pagination(String),

    /// A localized-string map is malformed.
    #[error("i18n error: {0}")]
    I18n(String),

    /// A bundle could not be resolved against the corpus.
    #[error("bundle resolution error: {0}")]
    BundleResolution(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
