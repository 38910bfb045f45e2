//! # Bundle Definition Model
//!
//! Typed representation of a bundle definition document: the author-facing
//! description of a curated export. Definitions declare a fixed schema
//! version, a kebab-case identifier, the workspace to draw from, optional
//! taxonomy filters, the item kinds to include, and an explicit ordering
//! specification.
//!
//! Like the catalog types, `from_value` assumes the document already passed
//! schema validation and surfaces residual mismatch as
//! `GlossaError::Serialization`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use glossa_core::{CefrLevel, GlossaError, ItemKind, Register, SortKey};

/// Taxonomy constraints on the flattened corpus. Absent fields match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleFilters {
    /// Exact-match constraint on the `scenario:` tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    /// Exact-match constraint on the `register:` tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register: Option<Register>,
    /// Exact-match constraint on the `structure:` tag.
    #[serde(rename = "primaryStructure", skip_serializing_if = "Option::is_none")]
    pub primary_structure: Option<String>,
    /// Set-membership constraint on the proficiency level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<BTreeSet<CefrLevel>>,
}

impl BundleFilters {
    /// True if no constraint is set and every item matches.
    pub fn is_unconstrained(&self) -> bool {
        self.scenario.is_none()
            && self.register.is_none()
            && self.primary_structure.is_none()
            && self.levels.is_none()
    }
}

/// The declared ordering of a bundle's item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingSpec {
    /// Ordering keys, applied left to right.
    pub by: Vec<SortKey>,
    /// Always `true`; schema validation rejects anything else.
    pub stable: bool,
}

/// A complete bundle definition document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleDefinition {
    /// Fixed schema version; currently always 1.
    pub version: u64,
    /// Kebab-case bundle identifier.
    pub id: String,
    /// Workspace the bundle draws its corpus from.
    pub workspace: String,
    /// Display title.
    pub title: String,
    /// Short description, capped at 280 characters by schema validation.
    pub description: String,
    /// Taxonomy filters; omitted means unconstrained.
    #[serde(default, skip_serializing_if = "BundleFilters::is_unconstrained")]
    pub filters: BundleFilters,
    /// Item kinds admitted into the bundle.
    #[serde(rename = "includeKinds")]
    pub include_kinds: BTreeSet<ItemKind>,
    /// Ordering specification.
    pub ordering: OrderingSpec,
}

impl BundleDefinition {
    /// Parse a definition from an already-validated JSON value.
    pub fn from_value(value: &Value) -> Result<Self, GlossaError> {
        Ok(serde_json::from_value(value.clone())?)
    }
}
