//! # Corpus Validation
//!
//! Layered validators over an immutable [`Snapshot`](glossa_catalog::Snapshot):
//!
//! - [`schema`] — per-document field presence and type checks against
//!   closed field tables, one table per document kind;
//! - [`refs`] — cross-document link integrity (dangling URLs, identifier
//!   mismatches, orphaned packs, duplicate workspaces);
//! - [`pagination`] — section page chains (contiguity, cycles, conventions,
//!   declared totals);
//! - [`i18n`] — localized-string maps and the fallback-locale policy.
//!
//! Validators never abort on bad content. Every parseable document yields
//! a (possibly empty) list of [`ValidationIssue`] records, and
//! [`run_validation`] merges all of them into one [`ValidationReport`].
//! The only fatal condition in the whole pipeline is an unparseable file,
//! which the loader rejects before a snapshot exists.

pub mod i18n;
pub mod pagination;
pub mod refs;
pub mod report;
pub mod schema;

use glossa_catalog::{DocumentKind, Snapshot};
use tracing::debug;

pub use report::{IssueKind, Severity, ValidationIssue, ValidationReport};

/// Knobs for a validation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationConfig {
    /// Escalate a missing `"en"` entry in localized maps from warning to
    /// hard error.
    pub require_fallback_locale: bool,
}

/// Run every validator over the snapshot and merge their findings.
pub fn run_validation(snapshot: &Snapshot, config: &ValidationConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (path, doc) in snapshot.iter() {
        if let Some(kind) = DocumentKind::infer(path) {
            report.extend(schema::validate_document(path, kind, doc));
        }
    }
    report.extend(refs::validate_references(snapshot));
    report.extend(pagination::validate_pagination(snapshot));
    report.extend(i18n::validate_i18n(snapshot, config));

    debug!(
        documents = snapshot.len(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validation run complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_core::ContentPath;
    use serde_json::json;

    /// A minimal corpus with one workspace, one single-page section and one
    /// pack, internally consistent.
    fn clean_snapshot() -> Snapshot {
        Snapshot::from_documents([
            (
                ContentPath::new("/v1/workspaces/de/catalog.json"),
                json!({
                    "workspace": "de",
                    "language": "German",
                    "sections": [{
                        "id": "context",
                        "kind": "context",
                        "title": "Everyday Situations",
                        "itemsUrl": "/v1/workspaces/de/context/index.json"
                    }]
                }),
            ),
            (
                ContentPath::new("/v1/workspaces/de/context/index.json"),
                json!({
                    "page": 1,
                    "pageSize": 50,
                    "items": [{
                        "id": "at-the-doctor",
                        "title": "At the doctor",
                        "type": "context",
                        "level": "A2",
                        "durationMins": 10,
                        "packUrl": "/v1/packs/at-the-doctor.json"
                    }],
                    "nextPage": null,
                    "total": 1
                }),
            ),
            (
                ContentPath::new("/v1/packs/at-the-doctor.json"),
                json!({
                    "id": "at-the-doctor",
                    "type": "context",
                    "title": "At the doctor",
                    "language": "de",
                    "level": "A2",
                    "durationMins": 10,
                    "tags": ["scenario:health"],
                    "items": [{
                        "id": "greet",
                        "text": "Guten Tag, Herr Doktor.",
                        "translation": "Good day, doctor.",
                        "audioUrl": "https://cdn.example.com/a.mp3"
                    }]
                }),
            ),
        ])
    }

    #[test]
    fn test_clean_corpus_passes() {
        let report = run_validation(&clean_snapshot(), &ValidationConfig::default());
        assert!(!report.has_errors(), "unexpected report:\n{report}");
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn test_all_validator_families_contribute() {
        // One corpus with a schema error, a dangling reference, a broken
        // chain and a malformed i18n map; each family must report. The
        // index stays parseable so the reference and pagination walks run.
        let snap = Snapshot::from_documents([
            (
                ContentPath::new("/v1/workspaces/de/catalog.json"),
                json!({
                    "workspace": "de",
                    "language": "German",
                    "sections": [{
                        "id": "context",
                        "kind": "context",
                        "title": "Everyday Situations",
                        "itemsUrl": "/v1/workspaces/de/context/index.json"
                    }]
                }),
            ),
            (
                ContentPath::new("/v1/workspaces/de/context/index.json"),
                json!({
                    "page": 1,
                    "pageSize": 50,
                    "items": [{
                        "id": "gone",
                        "title": "Gone",
                        "type": "context",
                        "level": "A1",
                        "durationMins": 5,
                        // Dangling target: reference error.
                        "packUrl": "/v1/packs/gone.json"
                    }],
                    // Dangling chain: pagination error.
                    "nextPage": "/v1/workspaces/de/context/pages/2.json"
                }),
            ),
            (
                ContentPath::new("/v1/packs/bad.json"),
                json!({
                    "id": "bad",
                    "type": "context",
                    // title missing: schema error.
                    "language": "de",
                    "level": "A1",
                    "durationMins": 5,
                    "tags": [],
                    "items": [],
                    // Nested value: i18n error.
                    "titleI18n": {"en": {"long": "Bad"}}
                }),
            ),
        ]);
        let report = run_validation(&snap, &ValidationConfig::default());
        let kinds: Vec<IssueKind> = report.issues().iter().map(|i| i.kind).collect();
        assert!(kinds.contains(&IssueKind::Schema));
        assert!(kinds.contains(&IssueKind::Reference));
        assert!(kinds.contains(&IssueKind::Pagination));
        assert!(kinds.contains(&IssueKind::I18n));
    }

    #[test]
    fn test_strict_i18n_escalates_fallback() {
        let base = clean_snapshot();
        let mut docs: Vec<(ContentPath, serde_json::Value)> = Vec::new();
        for (p, d) in base.iter() {
            let mut d = d.clone();
            if p.as_str().ends_with("/at-the-doctor.json") {
                d["titleI18n"] = json!({"de": "Beim Arzt"});
            }
            docs.push((p.clone(), d));
        }
        let snap = Snapshot::from_documents(docs);

        let lax = run_validation(&snap, &ValidationConfig::default());
        assert!(!lax.has_errors());
        assert_eq!(lax.warning_count(), 1);

        let strict = run_validation(
            &snap,
            &ValidationConfig {
                require_fallback_locale: true,
            },
        );
        assert!(strict.has_errors());
    }
}
