//! # Deterministic Ordering
//!
//! Sorts the filtered item list by the definition's ordering keys, applied
//! left to right, with the pack id as an implicit final tiebreaker. Level
//! compares by proficiency rank, kind by the fixed pack type rank
//! (context < drill < exam), and all string keys by code-point order with
//! no locale or case folding. Items missing a taxonomy value sort before
//! items that have one.
//!
//! The id tiebreaker makes the comparator total over any corpus with
//! unique pack ids, so the sorted output is independent of input order.

use std::cmp::Ordering;

use glossa_core::SortKey;

use crate::corpus::CorpusItem;

/// Compare two items under the given ordering keys.
pub fn compare(a: &CorpusItem, b: &CorpusItem, by: &[SortKey]) -> Ordering {
    for key in by {
        let ordering = match key {
            SortKey::Level => a.level.rank().cmp(&b.level.rank()),
            SortKey::Kind => a.pack_type.rank().cmp(&b.pack_type.rank()),
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Scenario => a.scenario.cmp(&b.scenario),
            SortKey::PrimaryStructure => a.primary_structure.cmp(&b.primary_structure),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.id.cmp(&b.id)
}

/// Sort the item list in place under the given ordering keys.
pub fn sort_items(items: &mut [CorpusItem], by: &[SortKey]) {
    items.sort_by(|a, b| compare(a, b, by));
}
