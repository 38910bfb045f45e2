//! # Corpus Flattening
//!
//! Turns the hierarchical content tree of one workspace into a flat,
//! de-duplicated list of [`CorpusItem`] records ready for filtering and
//! ordering. Flattening walks every section chain of every catalog that
//! declares the requested workspace, collects pack references page by
//! page, and enriches each with the taxonomy tags of its pack document.
//!
//! Flattening presumes a corpus that passed validation; on damaged input
//! it degrades rather than fails. A missing or unparseable pack document
//! leaves the item with the index projection and no taxonomy, a broken
//! chain yields the pages reached before the break.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use glossa_catalog::{Catalog, DocumentKind, IndexPage, Pack, PackRef, Snapshot};
use glossa_core::{CefrLevel, ContentPath, ItemKind, PackType, Register};

/// A flattened content item: one pack, projected to the fields bundle
/// filtering and ordering operate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusItem {
    /// Pack identifier, unique in the flattened corpus.
    pub id: String,
    /// Corpus path of the pack document.
    pub path: ContentPath,
    /// Flattened kind (pack or drill), derived from the pack type.
    pub kind: ItemKind,
    /// Pack type.
    #[serde(rename = "type")]
    pub pack_type: PackType,
    /// Proficiency level.
    pub level: CefrLevel,
    /// Display title.
    pub title: String,
    /// Estimated duration in minutes.
    #[serde(rename = "durationMins")]
    pub duration_mins: u64,
    /// Value of the `scenario:` taxonomy tag, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    /// Value of the `register:` taxonomy tag, if present and well-formed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register: Option<Register>,
    /// Value of the `structure:` taxonomy tag, if present.
    #[serde(rename = "primaryStructure", skip_serializing_if = "Option::is_none")]
    pub primary_structure: Option<String>,
}

impl CorpusItem {
    fn from_ref(reference: &PackRef, pack: Option<&Pack>) -> Self {
        let (scenario, register, primary_structure) = match pack {
            Some(pack) => (
                pack.tag_value("scenario").map(str::to_owned),
                pack.tag_value("register").and_then(|r| r.parse().ok()),
                pack.tag_value("structure").map(str::to_owned),
            ),
            None => (None, None, None),
        };
        CorpusItem {
            id: reference.id.clone(),
            path: reference.pack_url.clone(),
            kind: reference.pack_type.item_kind(),
            pack_type: reference.pack_type,
            level: reference.level,
            title: reference.title.clone(),
            duration_mins: reference.duration_mins,
            scenario,
            register,
            primary_structure,
        }
    }
}

/// Flatten the content tree of one workspace into corpus items,
/// de-duplicated by pack id (first occurrence wins).
pub fn flatten(snapshot: &Snapshot, workspace: &str) -> Vec<CorpusItem> {
    let mut by_id: BTreeMap<String, CorpusItem> = BTreeMap::new();

    for (_, doc) in snapshot.documents_of_kind(DocumentKind::Catalog) {
        let Ok(catalog) = Catalog::from_value(doc) else {
            continue;
        };
        if catalog.workspace != workspace {
            continue;
        }
        for section in &catalog.sections {
            collect_chain(snapshot, &section.items_url, &mut by_id);
        }
    }

    debug!(workspace, items = by_id.len(), "flattened workspace corpus");
    by_id.into_values().collect()
}

/// Walk one section chain and collect its pack references.
fn collect_chain(
    snapshot: &Snapshot,
    first_page: &ContentPath,
    by_id: &mut BTreeMap<String, CorpusItem>,
) {
    let mut visited: BTreeSet<ContentPath> = BTreeSet::new();
    let mut current = first_page.clone();

    loop {
        if !visited.insert(current.clone()) {
            return;
        }
        let Some(doc) = snapshot.get(&current) else {
            return;
        };
        let Ok(page) = IndexPage::from_value(doc) else {
            return;
        };

        for reference in &page.items {
            let pack = snapshot
                .get(&reference.pack_url)
                .and_then(|v| Pack::from_value(v).ok());
            let item = CorpusItem::from_ref(reference, pack.as_ref());
            by_id.entry(item.id.clone()).or_insert(item);
        }

        match page.next_page {
            Some(next) => current = next,
            None => return,
        }
    }
}
