//! # Immutable Content Snapshot
//!
//! The [`Snapshot`] holds every parsed document of a content tree, keyed by
//! its versioned corpus path. It is constructed once (by the loader or from
//! in-memory documents in tests) and never mutated afterwards; all
//! validators and the bundle engine take `&Snapshot`.
//!
//! A `BTreeMap` backs the snapshot so iteration order is the lexicographic
//! path order — reports and flattened views derived from a snapshot are
//! deterministic without any extra sorting.

use std::collections::BTreeMap;

use serde_json::Value;

use glossa_core::ContentPath;

use crate::document::DocumentKind;

/// An immutable, path-keyed view of a loaded content tree.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    documents: BTreeMap<ContentPath, Value>,
}

impl Snapshot {
    /// Build a snapshot from `(path, document)` pairs.
    ///
    /// Later entries win on duplicate paths, matching filesystem semantics
    /// where a path identifies exactly one document.
    pub fn from_documents<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = (ContentPath, Value)>,
    {
        Self {
            documents: documents.into_iter().collect(),
        }
    }

    /// Look up a document by path.
    pub fn get(&self, path: &ContentPath) -> Option<&Value> {
        self.documents.get(path)
    }

    /// True if a document exists at the path.
    pub fn contains(&self, path: &ContentPath) -> bool {
        self.documents.contains_key(path)
    }

    /// All document paths, in lexicographic order.
    pub fn paths(&self) -> impl Iterator<Item = &ContentPath> {
        self.documents.keys()
    }

    /// All `(path, document)` pairs, in lexicographic path order.
    pub fn iter(&self) -> impl Iterator<Item = (&ContentPath, &Value)> {
        self.documents.iter()
    }

    /// All documents of a given inferred kind, in lexicographic path order.
    pub fn documents_of_kind(
        &self,
        kind: DocumentKind,
    ) -> impl Iterator<Item = (&ContentPath, &Value)> {
        self.iter()
            .filter(move |(path, _)| DocumentKind::infer(path) == Some(kind))
    }

    /// Number of documents in the snapshot.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if the snapshot holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Snapshot {
        Snapshot::from_documents([
            (
                ContentPath::new("/v1/workspaces/de/catalog.json"),
                json!({"workspace": "de"}),
            ),
            (
                ContentPath::new("/v1/workspaces/de/context/index.json"),
                json!({"page": 1}),
            ),
            (
                ContentPath::new("/v1/packs/pack-001.json"),
                json!({"id": "pack-001"}),
            ),
        ])
    }

    #[test]
    fn test_lookup_and_contains() {
        let snap = sample();
        let path = ContentPath::new("/v1/packs/pack-001.json");
        assert!(snap.contains(&path));
        assert_eq!(snap.get(&path).unwrap()["id"], "pack-001");
        assert!(!snap.contains(&ContentPath::new("/v1/packs/missing.json")));
    }

    #[test]
    fn test_paths_ordered() {
        let snap = sample();
        let paths: Vec<&str> = snap.paths().map(|p| p.as_str()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }

    #[test]
    fn test_documents_of_kind() {
        let snap = sample();
        assert_eq!(snap.documents_of_kind(DocumentKind::Catalog).count(), 1);
        assert_eq!(snap.documents_of_kind(DocumentKind::Index).count(), 1);
        assert_eq!(snap.documents_of_kind(DocumentKind::Pack).count(), 1);
    }

    #[test]
    fn test_duplicate_paths_last_wins() {
        let path = ContentPath::new("/v1/packs/a.json");
        let snap = Snapshot::from_documents([
            (path.clone(), json!({"id": "first"})),
            (path.clone(), json!({"id": "second"})),
        ]);
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.get(&path).unwrap()["id"], "second");
    }
}
