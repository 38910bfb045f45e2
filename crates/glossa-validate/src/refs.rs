//! # Reference Resolution — Cross-Document Integrity
//!
//! Walks every URL-shaped field in the snapshot (`itemsUrl`, `packUrl`,
//! `nextPage`) and verifies the path conventions and the referenced
//! targets:
//!
//! 1. The literal path begins with the version prefix and is never a
//!    fully-qualified external URL.
//! 2. A document exists at the path (for `itemsUrl` and `packUrl`;
//!    `nextPage` target existence belongs to the pagination validator so a
//!    broken chain is reported exactly once).
//! 3. For pack references, the pack's declared id equals the id implied by
//!    its storage path, and the referring `PackRef.id` matches both.
//!
//! Orphan packs — present in storage but referenced by no index — are
//! warnings: unreferenced content does not break serving correctness.
//!
//! Documents that fail to parse into their typed form are skipped here;
//! the schema validator already reported their structural issues.

use std::collections::{BTreeMap, BTreeSet};

use glossa_catalog::{Catalog, DocumentKind, IndexPage, Snapshot};
use glossa_core::ContentPath;

use crate::report::{IssueKind, ValidationIssue};

/// Validate all cross-document references in the snapshot.
pub fn validate_references(snapshot: &Snapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_workspace_uniqueness(snapshot, &mut issues);
    check_catalog_links(snapshot, &mut issues);
    let referenced_packs = check_index_links(snapshot, &mut issues);
    check_orphan_packs(snapshot, &referenced_packs, &mut issues);

    issues
}

fn reference_error(
    document: &ContentPath,
    field: impl Into<String>,
    message: impl Into<String>,
) -> ValidationIssue {
    ValidationIssue::error(IssueKind::Reference, document.clone(), field, message)
}

/// Check the literal form of a reference path: versioned prefix, never an
/// external URL. Returns false when the form is invalid.
fn check_path_form(
    document: &ContentPath,
    field: &str,
    target: &ContentPath,
    issues: &mut Vec<ValidationIssue>,
) -> bool {
    if target.is_external_url() {
        issues.push(reference_error(
            document,
            field,
            format!(
                "external URLs are not permitted for catalog references: {}",
                target
            ),
        ));
        return false;
    }
    if !target.is_versioned() {
        issues.push(reference_error(
            document,
            field,
            format!("path must begin with the version prefix: {target}"),
        ));
        return false;
    }
    true
}

/// Workspace ids must be unique across the corpus.
fn check_workspace_uniqueness(snapshot: &Snapshot, issues: &mut Vec<ValidationIssue>) {
    let mut seen: BTreeMap<String, ContentPath> = BTreeMap::new();
    for (path, doc) in snapshot.documents_of_kind(DocumentKind::Catalog) {
        let Some(workspace) = doc.get("workspace").and_then(|v| v.as_str()) else {
            continue;
        };
        if let Some(first) = seen.get(workspace) {
            issues.push(reference_error(
                path,
                "/workspace",
                format!("workspace id {workspace:?} already declared by {first}"),
            ));
        } else {
            seen.insert(workspace.to_string(), path.clone());
        }
    }
}

/// Section `itemsUrl` links: form + existence.
fn check_catalog_links(snapshot: &Snapshot, issues: &mut Vec<ValidationIssue>) {
    for (path, doc) in snapshot.documents_of_kind(DocumentKind::Catalog) {
        let Ok(catalog) = Catalog::from_value(doc) else {
            continue;
        };
        for (i, section) in catalog.sections.iter().enumerate() {
            let field = format!("/sections/{i}/itemsUrl");
            if !check_path_form(path, &field, &section.items_url, issues) {
                continue;
            }
            if !snapshot.contains(&section.items_url) {
                issues.push(reference_error(
                    path,
                    field,
                    format!("no document at {}", section.items_url),
                ));
            }
        }
    }
}

/// Pack references on index pages: form, existence, id consistency.
/// Returns the set of pack paths referenced by any index.
fn check_index_links(
    snapshot: &Snapshot,
    issues: &mut Vec<ValidationIssue>,
) -> BTreeSet<ContentPath> {
    let mut referenced = BTreeSet::new();

    for (path, doc) in snapshot.documents_of_kind(DocumentKind::Index) {
        let Ok(page) = IndexPage::from_value(doc) else {
            continue;
        };

        if let Some(next) = &page.next_page {
            // Existence of the next page is the pagination validator's
            // concern; only the literal form is checked here.
            check_path_form(path, "/nextPage", next, issues);
        }

        for (i, item) in page.items.iter().enumerate() {
            let field = format!("/items/{i}/packUrl");
            if !check_path_form(path, &field, &item.pack_url, issues) {
                continue;
            }
            referenced.insert(item.pack_url.clone());

            let Some(pack_doc) = snapshot.get(&item.pack_url) else {
                issues.push(reference_error(
                    path,
                    field,
                    format!("no document at {}", item.pack_url),
                ));
                continue;
            };

            let path_id = item.pack_url.pack_id();
            let declared_id = pack_doc.get("id").and_then(|v| v.as_str());

            if let (Some(declared), Some(derived)) = (declared_id, path_id) {
                if declared != derived {
                    issues.push(reference_error(
                        &item.pack_url,
                        "/id",
                        format!(
                            "declared pack id {declared:?} does not match the id implied by its storage path ({derived:?})"
                        ),
                    ));
                }
            }
            if let Some(declared) = declared_id {
                if item.id != declared {
                    issues.push(reference_error(
                        path,
                        format!("/items/{i}/id"),
                        format!(
                            "pack ref id {:?} does not match the referenced pack's id {declared:?}",
                            item.id
                        ),
                    ));
                }
            }
        }
    }

    referenced
}

/// Packs present in storage but referenced by no index.
fn check_orphan_packs(
    snapshot: &Snapshot,
    referenced: &BTreeSet<ContentPath>,
    issues: &mut Vec<ValidationIssue>,
) {
    for (path, _) in snapshot.documents_of_kind(DocumentKind::Pack) {
        if !referenced.contains(path) {
            issues.push(ValidationIssue::warning(
                IssueKind::Reference,
                path.clone(),
                "",
                "pack is referenced by no index",
            ));
        }
    }
}
