//! # Localized String Validation
//!
//! Checks every field of the localized-string-map shape (keys ending in
//! `I18n`, e.g. `titleI18n`, `shortTitleI18n`) anywhere in a document:
//!
//! - the value must be a flat mapping from language code to string — no
//!   nested structures;
//! - `shortTitle`-family variants must not exceed 28 characters in any
//!   language (they are rendered in fixed-width navigation chrome);
//! - a missing entry for the canonical fallback locale `"en"` is a
//!   warning by default, escalated to a hard error when the run is
//!   configured with `require_fallback_locale`.
//!
//! This validator layers on top of schema validation: i18n fields are
//! optional additions to the required base fields, so their absence is
//! never an issue — only their malformation.

use serde_json::Value;

use glossa_catalog::Snapshot;
use glossa_core::ContentPath;

use crate::report::{IssueKind, ValidationIssue};
use crate::ValidationConfig;

/// The canonical fallback language code.
pub const FALLBACK_LOCALE: &str = "en";

/// Maximum length of a short-title variant, in characters.
pub const MAX_SHORT_TITLE_CHARS: usize = 28;

/// Validate all localized-string maps in the snapshot.
pub fn validate_i18n(snapshot: &Snapshot, config: &ValidationConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (path, doc) in snapshot.iter() {
        walk_value(path, "", doc, config, &mut issues);
    }
    issues
}

fn walk_value(
    document: &ContentPath,
    pointer: &str,
    value: &Value,
    config: &ValidationConfig,
    issues: &mut Vec<ValidationIssue>,
) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_pointer = format!("{pointer}/{key}");
                if key.ends_with("I18n") {
                    check_localized_map(document, &child_pointer, key, child, config, issues);
                } else {
                    walk_value(document, &child_pointer, child, config, issues);
                }
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                walk_value(document, &format!("{pointer}/{i}"), child, config, issues);
            }
        }
        _ => {}
    }
}

fn check_localized_map(
    document: &ContentPath,
    pointer: &str,
    key: &str,
    value: &Value,
    config: &ValidationConfig,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(map) = value.as_object() else {
        issues.push(ValidationIssue::error(
            IssueKind::I18n,
            document.clone(),
            pointer,
            "expected a mapping from language code to string",
        ));
        return;
    };

    for (lang, entry) in map {
        let entry_pointer = format!("{pointer}/{lang}");
        let Some(text) = entry.as_str() else {
            issues.push(ValidationIssue::error(
                IssueKind::I18n,
                document.clone(),
                entry_pointer,
                "localized values must be strings, not nested structures",
            ));
            continue;
        };
        if key.starts_with("shortTitle") {
            let chars = text.chars().count();
            if chars > MAX_SHORT_TITLE_CHARS {
                issues.push(ValidationIssue::error(
                    IssueKind::I18n,
                    document.clone(),
                    entry_pointer,
                    format!(
                        "short title exceeds {MAX_SHORT_TITLE_CHARS} characters ({chars}) for language {lang:?}"
                    ),
                ));
            }
        }
    }

    if !map.contains_key(FALLBACK_LOCALE) {
        let message = format!("no entry for fallback locale {FALLBACK_LOCALE:?}");
        let issue = if config.require_fallback_locale {
            ValidationIssue::error(IssueKind::I18n, document.clone(), pointer, message)
        } else {
            ValidationIssue::warning(IssueKind::I18n, document.clone(), pointer, message)
        };
        issues.push(issue);
    }
}
