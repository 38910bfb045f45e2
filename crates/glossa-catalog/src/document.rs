//! # Catalog Document Types
//!
//! Typed representations of the four document kinds in the content tree:
//!
//! ```text
//! Catalog (one per workspace)
//! ├── sections: [SectionEntry]          — itemsUrl → first IndexPage
//! IndexPage (paginated)
//! ├── items: [PackRef]                  — packUrl → Pack
//! └── nextPage → IndexPage | null
//! Pack
//! └── items: [ContentItem]              — shape varies by pack type
//! ```
//!
//! `PackRef` is a lightweight projection; the `Pack` document is the source
//! of truth for item-level content. The two are related by `packUrl`
//! reference, never by embedding.
//!
//! ## Parsing
//!
//! Each type offers a `from_value` constructor over an already-parsed
//! `serde_json::Value`. Structural validation (missing fields, wrong types,
//! out-of-vocabulary enums) is the schema validator's job; these
//! constructors are for documents that already passed it, and surface any
//! residual mismatch as a `GlossaError::Serialization`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use glossa_core::{CefrLevel, ContentPath, GlossaError, PackType, SectionKind};

/// A localized-string map: language code → translated string.
pub type LocalizedText = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Document Kinds
// ---------------------------------------------------------------------------

/// The declared kind of a catalog document, which selects the schema field
/// table it is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Workspace catalog (`.../catalog.json`).
    Catalog,
    /// Paginated section index (`.../index.json` or `.../pages/{N}.json`).
    Index,
    /// Content pack (`.../packs/{id}.json`).
    Pack,
    /// Bundle definition document.
    BundleDefinition,
}

impl DocumentKind {
    /// Infer the document kind from its storage path conventions.
    ///
    /// Returns `None` for paths that match no convention; such documents
    /// are ignored by the validators.
    pub fn infer(path: &ContentPath) -> Option<DocumentKind> {
        let p = path.as_str();
        if p.ends_with("/catalog.json") {
            Some(DocumentKind::Catalog)
        } else if p.contains("/packs/") && p.ends_with(".json") {
            Some(DocumentKind::Pack)
        } else if path.section_root().is_some() {
            Some(DocumentKind::Index)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A named content category within a workspace catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    /// Section identifier, unique within the workspace.
    pub id: String,
    /// Section kind.
    pub kind: SectionKind,
    /// Display title.
    pub title: String,
    /// Versioned absolute path to the section's first index page.
    #[serde(rename = "itemsUrl")]
    pub items_url: ContentPath,
}

/// Top-level workspace catalog: one per language/curriculum namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Workspace identifier (e.g., `de`). Unique across the corpus.
    pub workspace: String,
    /// Display language name.
    pub language: String,
    /// Ordered list of sections.
    pub sections: Vec<SectionEntry>,
}

impl Catalog {
    /// Parse a catalog from an already-validated JSON value.
    pub fn from_value(value: &Value) -> Result<Self, GlossaError> {
        Ok(serde_json::from_value(value.clone())?)
    }
}

// ---------------------------------------------------------------------------
// Index
// ---------------------------------------------------------------------------

/// A lightweight projection of a pack, as listed on an index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackRef {
    /// Pack identifier. Must match the referenced pack's declared id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Localized title variants, if authored.
    #[serde(rename = "titleI18n", default, skip_serializing_if = "Option::is_none")]
    pub title_i18n: Option<LocalizedText>,
    /// Localized short-title variants, if authored. Capped at 28 characters
    /// per language by the i18n validator.
    #[serde(
        rename = "shortTitleI18n",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub short_title_i18n: Option<LocalizedText>,
    /// Pack type.
    #[serde(rename = "type")]
    pub pack_type: PackType,
    /// Proficiency level.
    pub level: CefrLevel,
    /// Estimated duration in minutes.
    #[serde(rename = "durationMins")]
    pub duration_mins: u64,
    /// Versioned absolute path to the pack document.
    #[serde(rename = "packUrl")]
    pub pack_url: ContentPath,
}

/// One page of a paginated section index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexPage {
    /// 1-based page number.
    pub page: u64,
    /// Maximum number of items per page.
    #[serde(rename = "pageSize")]
    pub page_size: u64,
    /// Pack references on this page. Length must not exceed `page_size`.
    pub items: Vec<PackRef>,
    /// Path to the next page, or `None` on the terminal page.
    #[serde(rename = "nextPage")]
    pub next_page: Option<ContentPath>,
    /// Declared total item count across all pages of the chain, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl IndexPage {
    /// Parse an index page from an already-validated JSON value.
    pub fn from_value(value: &Value) -> Result<Self, GlossaError> {
        Ok(serde_json::from_value(value.clone())?)
    }
}

// ---------------------------------------------------------------------------
// Pack
// ---------------------------------------------------------------------------

/// A titled unit of content items sharing a type, level, and duration.
///
/// Items are kept as raw values here; their per-type shape is enforced by
/// the schema validator's variant tables and materialized on demand via
/// [`ContentItem::from_value`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    /// Pack identifier. Must equal the id derived from the storage path.
    pub id: String,
    /// Pack type, which determines the item shape.
    #[serde(rename = "type")]
    pub pack_type: PackType,
    /// Display title.
    pub title: String,
    /// Language code of the pack content (e.g., `de`).
    pub language: String,
    /// Proficiency level.
    pub level: CefrLevel,
    /// Estimated duration in minutes.
    #[serde(rename = "durationMins")]
    pub duration_mins: u64,
    /// Taxonomy tags. Dimension tags use `key:value` form
    /// (`scenario:doctor`, `register:formal`, `structure:modal-verbs`).
    pub tags: BTreeSet<String>,
    /// Ordered content items, raw.
    pub items: Vec<Value>,
}

impl Pack {
    /// Parse a pack from an already-validated JSON value.
    pub fn from_value(value: &Value) -> Result<Self, GlossaError> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Look up the value of a `key:value` taxonomy tag.
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        let prefix = format!("{key}:");
        self.tags
            .iter()
            .find_map(|t| t.strip_prefix(prefix.as_str()))
    }

    /// Materialize the typed items for this pack's type.
    pub fn typed_items(&self) -> Result<Vec<ContentItem>, GlossaError> {
        self.items
            .iter()
            .map(|v| ContentItem::from_value(self.pack_type, v))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Content Items (per-type variants)
// ---------------------------------------------------------------------------

/// A narrative context item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextItem {
    /// Item identifier within the pack.
    pub id: String,
    /// Source-language text.
    pub text: String,
    /// Translation into the learner's language.
    pub translation: String,
    /// Path to the audio recording.
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
}

/// An exam question item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamItem {
    /// Item identifier within the pack.
    pub id: String,
    /// Question text.
    pub question: String,
    /// Answer input type (e.g., `multiple_choice`, `free_text`).
    #[serde(rename = "answerType")]
    pub answer_type: String,
    /// Candidate answers.
    pub options: Vec<String>,
    /// The correct answer.
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

/// A grammar mechanics drill item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillItem {
    /// Item identifier within the pack.
    pub id: String,
    /// Structured drill prompt.
    pub prompt: Value,
    /// Localized title variants, if authored.
    #[serde(rename = "titleI18n", default, skip_serializing_if = "Option::is_none")]
    pub title_i18n: Option<LocalizedText>,
    /// Localized short-title variants, if authored.
    #[serde(
        rename = "shortTitleI18n",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub short_title_i18n: Option<LocalizedText>,
}

/// A content item, tagged by its owning pack's type.
///
/// Items do not carry a type discriminator of their own; the pack's `type`
/// field selects the variant shape for every item in the pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    /// Item of a `context` pack.
    Context(ContextItem),
    /// Item of an `exam` pack.
    Exam(ExamItem),
    /// Item of a `mechanics` pack.
    Drill(DrillItem),
}

impl ContentItem {
    /// Parse an item value using the owning pack's type as the variant tag.
    pub fn from_value(pack_type: PackType, value: &Value) -> Result<Self, GlossaError> {
        Ok(match pack_type {
            PackType::Context => ContentItem::Context(serde_json::from_value(value.clone())?),
            PackType::Exam => ContentItem::Exam(serde_json::from_value(value.clone())?),
            PackType::Mechanics => ContentItem::Drill(serde_json::from_value(value.clone())?),
        })
    }

    /// The item identifier, regardless of variant.
    pub fn id(&self) -> &str {
        match self {
            ContentItem::Context(i) => &i.id,
            ContentItem::Exam(i) => &i.id,
            ContentItem::Drill(i) => &i.id,
        }
    }
}
