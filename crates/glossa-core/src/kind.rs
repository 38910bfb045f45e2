//! # Content Kind Vocabularies
//!
//! Closed enumerations for the section, pack, item, and register
//! vocabularies. Each is the single definition used across the workspace;
//! schema validation rejects any value outside these sets.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GlossaError;

/// Kind of a section within a workspace catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Narrative context content (dialogues, stories).
    Context,
    /// Exam preparation content.
    Exams,
    /// Grammar mechanics drills.
    Mechanics,
}

impl SectionKind {
    /// Returns the snake_case identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::Exams => "exams",
            Self::Mechanics => "mechanics",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = GlossaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "context" => Ok(Self::Context),
            "exams" => Ok(Self::Exams),
            "mechanics" => Ok(Self::Mechanics),
            other => Err(GlossaError::SchemaValidation(format!(
                "unknown section kind: {other:?}"
            ))),
        }
    }
}

/// Type of a content pack, which also determines the shape of its items.
///
/// Comparison order is the fixed bundle-ordering rank:
/// context < mechanics (drill) < exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackType {
    /// Narrative items: `{id, text, translation, audioUrl}`.
    Context,
    /// Drill items: structured prompt plus optional localized titles.
    Mechanics,
    /// Exam items: `{id, question, answerType, options, correctAnswer}`.
    Exam,
}

impl PackType {
    /// Returns the snake_case identifier for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::Mechanics => "mechanics",
            Self::Exam => "exam",
        }
    }

    /// Fixed enumeration rank used by the bundle orderer.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// The flattened item kind packs of this type project to.
    pub fn item_kind(&self) -> ItemKind {
        match self {
            Self::Context | Self::Exam => ItemKind::Pack,
            Self::Mechanics => ItemKind::Drill,
        }
    }
}

impl std::fmt::Display for PackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackType {
    type Err = GlossaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "context" => Ok(Self::Context),
            "mechanics" => Ok(Self::Mechanics),
            "exam" => Ok(Self::Exam),
            other => Err(GlossaError::SchemaValidation(format!(
                "unknown pack type: {other:?}"
            ))),
        }
    }
}

/// Kind of a flattened corpus item, as named by `includeKinds` in a
/// bundle definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A titled content pack (context or exam type).
    Pack,
    /// A grammar mechanics drill pack.
    Drill,
}

impl ItemKind {
    /// Returns the snake_case identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pack => "pack",
            Self::Drill => "drill",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = GlossaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pack" => Ok(Self::Pack),
            "drill" => Ok(Self::Drill),
            other => Err(GlossaError::SchemaValidation(format!(
                "unknown item kind: {other:?}"
            ))),
        }
    }
}

/// Speech register taxonomy dimension, used as a bundle filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Register {
    /// Formal speech (Sie-form, polite constructions).
    Formal,
    /// Informal speech (du-form, colloquial constructions).
    Informal,
    /// Register-neutral content.
    Neutral,
}

impl Register {
    /// Returns the snake_case identifier for this register.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Informal => "informal",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Register {
    type Err = GlossaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "formal" => Ok(Self::Formal),
            "informal" => Ok(Self::Informal),
            "neutral" => Ok(Self::Neutral),
            other => Err(GlossaError::SchemaValidation(format!(
                "unknown register: {other:?}"
            ))),
        }
    }
}

/// A bundle ordering key, as declared in `ordering.by`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Compare by proficiency rank.
    Level,
    /// Compare by pack type rank (context < drill < exam).
    Kind,
    /// Compare by title, case-sensitive code-point order.
    Title,
    /// Compare by scenario tag, code-point order.
    Scenario,
    /// Compare by primary grammatical structure tag, code-point order.
    PrimaryStructure,
}

impl SortKey {
    /// Returns the camelCase identifier for this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Kind => "kind",
            Self::Title => "title",
            Self::Scenario => "scenario",
            Self::PrimaryStructure => "primaryStructure",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = GlossaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "level" => Ok(Self::Level),
            "kind" => Ok(Self::Kind),
            "title" => Ok(Self::Title),
            "scenario" => Ok(Self::Scenario),
            "primaryStructure" => Ok(Self::PrimaryStructure),
            other => Err(GlossaError::SchemaValidation(format!(
                "unknown ordering key: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_roundtrip() {
        for s in ["level", "kind", "title", "scenario", "primaryStructure"] {
            let key: SortKey = s.parse().unwrap();
            assert_eq!(key.as_str(), s);
        }
        assert!("durationMins".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_key_serde_camel_case() {
        assert_eq!(
            serde_json::to_string(&SortKey::PrimaryStructure).unwrap(),
            "\"primaryStructure\""
        );
    }

    #[test]
    fn test_pack_type_rank_order() {
        assert!(PackType::Context.rank() < PackType::Mechanics.rank());
        assert!(PackType::Mechanics.rank() < PackType::Exam.rank());
        assert!(PackType::Context < PackType::Mechanics);
        assert!(PackType::Mechanics < PackType::Exam);
    }

    #[test]
    fn test_pack_type_item_kind_projection() {
        assert_eq!(PackType::Context.item_kind(), ItemKind::Pack);
        assert_eq!(PackType::Exam.item_kind(), ItemKind::Pack);
        assert_eq!(PackType::Mechanics.item_kind(), ItemKind::Drill);
    }

    #[test]
    fn test_section_kind_roundtrip() {
        for s in ["context", "exams", "mechanics"] {
            let kind: SectionKind = s.parse().unwrap();
            assert_eq!(kind.as_str(), s);
        }
        assert!("drills".parse::<SectionKind>().is_err());
    }

    #[test]
    fn test_pack_type_roundtrip() {
        for s in ["context", "mechanics", "exam"] {
            let ty: PackType = s.parse().unwrap();
            assert_eq!(ty.as_str(), s);
        }
        assert!("exams".parse::<PackType>().is_err());
    }

    #[test]
    fn test_item_kind_roundtrip() {
        assert_eq!("pack".parse::<ItemKind>().unwrap(), ItemKind::Pack);
        assert_eq!("drill".parse::<ItemKind>().unwrap(), ItemKind::Drill);
        assert!("mechanics".parse::<ItemKind>().is_err());
    }

    #[test]
    fn test_register_roundtrip() {
        for s in ["formal", "informal", "neutral"] {
            let r: Register = s.parse().unwrap();
            assert_eq!(r.as_str(), s);
        }
        assert!("casual".parse::<Register>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        assert_eq!(
            serde_json::to_string(&PackType::Mechanics).unwrap(),
            "\"mechanics\""
        );
        assert_eq!(serde_json::to_string(&ItemKind::Drill).unwrap(), "\"drill\"");
        assert_eq!(
            serde_json::to_string(&SectionKind::Exams).unwrap(),
            "\"exams\""
        );
        assert_eq!(
            serde_json::to_string(&Register::Informal).unwrap(),
            "\"informal\""
        );
    }
}
