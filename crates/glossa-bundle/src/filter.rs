//! # Bundle Filtering
//!
//! Applies a definition's constraints to the flattened corpus. All
//! constraints combine with AND: an item survives only if its kind is in
//! `includeKinds` and every set taxonomy filter matches exactly. An absent
//! filter matches everything, including items that carry no value for that
//! dimension; a set filter never matches an item missing the dimension.

use crate::corpus::CorpusItem;
use crate::definition::BundleDefinition;

/// True if the item satisfies every constraint of the definition.
pub fn matches(item: &CorpusItem, definition: &BundleDefinition) -> bool {
    if !definition.include_kinds.contains(&item.kind) {
        return false;
    }
    let filters = &definition.filters;
    if let Some(scenario) = &filters.scenario {
        if item.scenario.as_deref() != Some(scenario.as_str()) {
            return false;
        }
    }
    if let Some(register) = filters.register {
        if item.register != Some(register) {
            return false;
        }
    }
    if let Some(structure) = &filters.primary_structure {
        if item.primary_structure.as_deref() != Some(structure.as_str()) {
            return false;
        }
    }
    if let Some(levels) = &filters.levels {
        if !levels.contains(&item.level) {
            return false;
        }
    }
    true
}

/// Retain the items that satisfy the definition, preserving input order.
pub fn apply(items: Vec<CorpusItem>, definition: &BundleDefinition) -> Vec<CorpusItem> {
    items
        .into_iter()
        .filter(|item| matches(item, definition))
        .collect()
}
