//! # Bundle Resolution
//!
//! Resolves author-written bundle definitions against a loaded corpus
//! snapshot into deterministic, ordered item lists ready for export:
//!
//! - [`definition`] — the typed bundle definition model;
//! - [`corpus`] — flattening a workspace's section chains into corpus items;
//! - [`filter`] — AND-combined taxonomy and kind constraints;
//! - [`order`] — the composite comparator behind stable, input-order
//!   independent output;
//! - [`resolve`] — the pipeline tying the stages together.
//!
//! Determinism is the engine's core guarantee: same definition, same
//! snapshot, same byte-for-byte manifest. Every intermediate collection is
//! ordered and the comparator is total over unique pack ids.

pub mod corpus;
pub mod definition;
pub mod filter;
pub mod order;
pub mod resolve;

pub use corpus::{flatten, CorpusItem};
pub use definition::{BundleDefinition, BundleFilters, OrderingSpec};
pub use resolve::{resolve, BundleError, ResolvedBundle};
