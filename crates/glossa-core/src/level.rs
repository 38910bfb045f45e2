//! # CEFR Proficiency Levels — Single Source of Truth
//!
//! Defines the `CefrLevel` enum with the five proficiency tiers the platform
//! publishes content for. This is the ONE definition used across the entire
//! workspace. Every `match` on `CefrLevel` must be exhaustive — adding a
//! tier forces every consumer to handle it at compile time.
//!
//! ## Ordering Invariant
//!
//! `CefrLevel` derives `Ord` in declaration order, which is proficiency
//! order: A1 < A2 < B1 < B2 < C1. Bundle ordering compares levels through
//! this rank, never lexicographically — "A10" style accidents cannot occur
//! because the vocabulary is closed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GlossaError;

/// A CEFR-like proficiency tier.
///
/// Used as a pack attribute, a bundle filter dimension, and a bundle
/// ordering key. Comparison order is proficiency rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CefrLevel {
    /// Beginner.
    A1,
    /// Elementary.
    A2,
    /// Intermediate.
    B1,
    /// Upper intermediate.
    B2,
    /// Advanced.
    C1,
}

impl CefrLevel {
    /// Returns all levels in canonical proficiency order.
    pub fn all() -> &'static [CefrLevel] {
        &[Self::A1, Self::A2, Self::B1, Self::B2, Self::C1]
    }

    /// Returns the canonical code for this level.
    ///
    /// This must match the serde serialization format and the level codes
    /// used in pack and index documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
        }
    }

    /// Numeric proficiency rank, A1 = 0 through C1 = 4.
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CefrLevel {
    type Err = GlossaError;

    /// Parse a level from its canonical code. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A1" => Ok(Self::A1),
            "A2" => Ok(Self::A2),
            "B1" => Ok(Self::B1),
            "B2" => Ok(Self::B2),
            "C1" => Ok(Self::C1),
            other => Err(GlossaError::SchemaValidation(format!(
                "unknown CEFR level: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_all_levels_count() {
        assert_eq!(CefrLevel::all().len(), 5);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for level in CefrLevel::all() {
            let parsed: CefrLevel = level.as_str().parse().unwrap();
            assert_eq!(*level, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("a1".parse::<CefrLevel>().is_err()); // case-sensitive
        assert!("C2".parse::<CefrLevel>().is_err()); // not published
        assert!("".parse::<CefrLevel>().is_err());
    }

    #[test]
    fn test_proficiency_order() {
        assert!(CefrLevel::A1 < CefrLevel::A2);
        assert!(CefrLevel::A2 < CefrLevel::B1);
        assert!(CefrLevel::B1 < CefrLevel::B2);
        assert!(CefrLevel::B2 < CefrLevel::C1);
    }

    #[test]
    fn test_rank_matches_order() {
        let all = CefrLevel::all();
        for window in all.windows(2) {
            assert!(window[0].rank() < window[1].rank());
        }
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for level in CefrLevel::all() {
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }

    proptest! {
        #[test]
        fn prop_parse_rejects_non_canonical(s in "[a-z0-9]{1,4}") {
            // Canonical codes are uppercase; any lowercase input must fail.
            prop_assert!(s.parse::<CefrLevel>().is_err());
        }
    }
}
