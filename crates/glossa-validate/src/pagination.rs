//! # Pagination Chain Validation
//!
//! Walks each section's index chain from its first page and verifies the
//! chain as a whole:
//!
//! - page numbers are contiguous starting at 1;
//! - every non-terminal `nextPage` follows the path convention for the
//!   immediately following page number and its target exists;
//! - the terminal page's `nextPage` is null;
//! - no page is visited twice (a visited-path set defends against
//!   malformed chains that loop);
//! - no page lists more items than its declared `pageSize`;
//! - if a total count is declared, it equals the summed item count.
//!
//! A chain that breaks (missing target, cycle) is reported once and
//! abandoned; its partial totals are not second-guessed. Validation then
//! continues with the next section — one bad chain never aborts the run.

use std::collections::BTreeSet;

use glossa_catalog::{Catalog, DocumentKind, IndexPage, Snapshot};
use glossa_core::ContentPath;

use crate::report::{IssueKind, ValidationIssue};

/// Validate every section's pagination chain in the snapshot.
pub fn validate_pagination(snapshot: &Snapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (_, doc) in snapshot.documents_of_kind(DocumentKind::Catalog) {
        let Ok(catalog) = Catalog::from_value(doc) else {
            continue;
        };
        for section in &catalog.sections {
            walk_chain(snapshot, &section.items_url, &mut issues);
        }
    }
    issues
}

fn pagination_error(
    document: &ContentPath,
    field: impl Into<String>,
    message: impl Into<String>,
) -> ValidationIssue {
    ValidationIssue::error(IssueKind::Pagination, document.clone(), field, message)
}

/// Walk one chain starting at its first page.
fn walk_chain(snapshot: &Snapshot, first_page: &ContentPath, issues: &mut Vec<ValidationIssue>) {
    let mut visited: BTreeSet<ContentPath> = BTreeSet::new();
    let mut current = first_page.clone();
    // The (document, field) that pointed at `current`; None for the first page.
    let mut came_from: Option<ContentPath> = None;
    let mut expected_page: u64 = 1;
    let mut item_sum: u64 = 0;
    let mut declared_totals: Vec<(ContentPath, u64)> = Vec::new();

    loop {
        if !snapshot.contains(&current) {
            // A missing first page is a dangling itemsUrl, which the
            // reference resolver already reported.
            if let Some(prev) = came_from {
                issues.push(pagination_error(
                    &prev,
                    "/nextPage",
                    format!("no document at {current}"),
                ));
            }
            return;
        }

        if !visited.insert(current.clone()) {
            let prev = came_from.unwrap_or_else(|| current.clone());
            issues.push(pagination_error(
                &prev,
                "/nextPage",
                format!("pagination chain cycles back to {current}"),
            ));
            return;
        }

        let Some(doc) = snapshot.get(&current) else {
            return;
        };
        let Ok(page) = IndexPage::from_value(doc) else {
            // Structurally broken page; the schema validator owns it.
            return;
        };

        if page.page != expected_page {
            issues.push(pagination_error(
                &current,
                "/page",
                format!("expected page {expected_page}, got {}", page.page),
            ));
        }

        let item_count = page.items.len() as u64;
        if item_count > page.page_size {
            issues.push(pagination_error(
                &current,
                "/items",
                format!(
                    "page lists {item_count} items, exceeding pageSize {}",
                    page.page_size
                ),
            ));
        }
        item_sum += item_count;

        if let Some(total) = page.total {
            declared_totals.push((current.clone(), total));
        }

        match page.next_page {
            None => break,
            Some(next) => {
                if let Some(expected) = current.page_path(expected_page + 1) {
                    if next != expected {
                        issues.push(pagination_error(
                            &current,
                            "/nextPage",
                            format!("expected next page at {expected}, got {next}"),
                        ));
                    }
                }
                came_from = Some(current);
                current = next;
                expected_page += 1;
            }
        }
    }

    for (page_path, total) in declared_totals {
        if total != item_sum {
            issues.push(pagination_error(
                &page_path,
                "/total",
                format!("declared total {total} does not match {item_sum} items across the chain"),
            ));
        }
    }
}
