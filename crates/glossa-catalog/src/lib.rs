//! # glossa-catalog — Catalog Document Model & Snapshot
//!
//! Implements the typed document model for the versioned content catalog
//! (workspace catalogs, paginated indexes, content packs, bundle
//! definitions), the immutable [`Snapshot`] every validator and the bundle
//! engine operate over, and the filesystem loader that constructs it.
//!
//! ## Load Once, Validate Many
//!
//! The snapshot is fully constructed before any validator runs and is never
//! mutated afterwards. Validators are pure functions of
//! `(snapshot, document)`; there is no shared mutable state, so independent
//! documents can be validated in any order or in parallel.
//!
//! ## Crate Policy
//!
//! - Depends only on `glossa-core` internally.
//! - The loader is the only module that touches the filesystem; everything
//!   above it works on parsed `serde_json::Value` trees.

pub mod document;
pub mod loader;
pub mod snapshot;

pub use document::{
    Catalog, ContentItem, ContextItem, DocumentKind, DrillItem, ExamItem, IndexPage, Pack,
    PackRef, SectionEntry,
};
pub use loader::{load_definition_file, load_snapshot, LoadError};
pub use snapshot::Snapshot;
