//! # glossa-core — Foundational Types for the Glossa Content Platform
//!
//! This crate is the bedrock of the Glossa workspace. It defines the
//! type-system primitives shared by every other crate: content paths, CEFR
//! proficiency levels, the closed kind/type/register enumerations, and the
//! top-level error type. Every other crate in the workspace depends on
//! `glossa-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrapper for content paths.** `ContentPath` carries the
//!    version-prefix and not-an-external-URL invariants and derives pack ids
//!    from storage locations. No bare strings for cross-document references.
//!
//! 2. **Closed enums for every vocabulary.** `CefrLevel`, `SectionKind`,
//!    `PackType`, `ItemKind`, `Register` — one definition each, exhaustive
//!    `match` everywhere. Adding a variant forces every consumer to handle it.
//!
//! 3. **Canonical ordering lives on the type.** `CefrLevel` and `PackType`
//!    derive `Ord` in proficiency/rank order so bundle ordering can never
//!    fall back to lexicographic comparison by accident.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `glossa-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod error;
pub mod kind;
pub mod level;
pub mod path;

pub use error::GlossaError;
pub use kind::{ItemKind, PackType, Register, SectionKind, SortKey};
pub use level::CefrLevel;
pub use path::{ContentPath, VERSION_PREFIX};
