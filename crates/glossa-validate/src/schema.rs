//! # Schema Validation — Per-Kind Field Tables
//!
//! Structural validation of parsed documents against the field table for
//! their declared kind (catalog / index / pack / bundle-definition). The
//! validator is a pure function of its input and accumulates every issue
//! it finds; it never stops at the first error and never fails for a
//! malformed-but-parseable document. Unparseable JSON is rejected earlier,
//! at the loader boundary.
//!
//! Pack items are validated against a per-variant table selected by the
//! pack's `type` tag — the item shapes form a closed set, not a bag of
//! optional properties.

use serde_json::Value;
use std::str::FromStr;

use glossa_catalog::DocumentKind;
use glossa_core::{CefrLevel, ContentPath, ItemKind, PackType, Register, SectionKind, SortKey};

use crate::report::{IssueKind, ValidationIssue};

/// Maximum length of a bundle definition description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 280;

/// The fixed bundle definition schema version.
pub const BUNDLE_SCHEMA_VERSION: u64 = 1;

// ---------------------------------------------------------------------------
// Field tables
// ---------------------------------------------------------------------------

/// Expected primitive shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldType {
    Str,
    Uint,
    Array,
    Object,
    /// Present with any non-null value.
    Any,
}

impl FieldType {
    fn describe(&self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Uint => "non-negative integer",
            Self::Array => "array",
            Self::Object => "object",
            Self::Any => "non-null value",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Str => value.is_string(),
            Self::Uint => value.is_u64(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
            Self::Any => !value.is_null(),
        }
    }
}

/// One row of a document kind's field table.
struct FieldSpec {
    name: &'static str,
    ty: FieldType,
    required: bool,
}

const fn req(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        required: true,
    }
}

const fn opt(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        required: false,
    }
}

const CATALOG_FIELDS: &[FieldSpec] = &[
    req("workspace", FieldType::Str),
    req("language", FieldType::Str),
    req("sections", FieldType::Array),
];

const SECTION_FIELDS: &[FieldSpec] = &[
    req("id", FieldType::Str),
    req("kind", FieldType::Str),
    req("title", FieldType::Str),
    req("itemsUrl", FieldType::Str),
];

const INDEX_FIELDS: &[FieldSpec] = &[
    req("page", FieldType::Uint),
    req("pageSize", FieldType::Uint),
    req("items", FieldType::Array),
    opt("total", FieldType::Uint),
];

const PACK_REF_FIELDS: &[FieldSpec] = &[
    req("id", FieldType::Str),
    req("title", FieldType::Str),
    req("type", FieldType::Str),
    req("level", FieldType::Str),
    req("durationMins", FieldType::Uint),
    req("packUrl", FieldType::Str),
    opt("titleI18n", FieldType::Object),
    opt("shortTitleI18n", FieldType::Object),
];

const PACK_FIELDS: &[FieldSpec] = &[
    req("id", FieldType::Str),
    req("type", FieldType::Str),
    req("title", FieldType::Str),
    req("language", FieldType::Str),
    req("level", FieldType::Str),
    req("durationMins", FieldType::Uint),
    req("tags", FieldType::Array),
    req("items", FieldType::Array),
];

const CONTEXT_ITEM_FIELDS: &[FieldSpec] = &[
    req("id", FieldType::Str),
    req("text", FieldType::Str),
    req("translation", FieldType::Str),
    req("audioUrl", FieldType::Str),
];

const EXAM_ITEM_FIELDS: &[FieldSpec] = &[
    req("id", FieldType::Str),
    req("question", FieldType::Str),
    req("answerType", FieldType::Str),
    req("options", FieldType::Array),
    req("correctAnswer", FieldType::Str),
];

const DRILL_ITEM_FIELDS: &[FieldSpec] = &[
    req("id", FieldType::Str),
    req("prompt", FieldType::Any),
    opt("titleI18n", FieldType::Object),
    opt("shortTitleI18n", FieldType::Object),
];

const BUNDLE_FIELDS: &[FieldSpec] = &[
    req("version", FieldType::Uint),
    req("id", FieldType::Str),
    req("workspace", FieldType::Str),
    req("title", FieldType::Str),
    req("description", FieldType::Str),
    opt("filters", FieldType::Object),
    req("includeKinds", FieldType::Array),
    req("ordering", FieldType::Object),
];

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Validate a parsed document against the field table for its kind.
///
/// Returns every field-level issue found; an empty list means the document
/// is structurally valid. Pure function of its input.
pub fn validate_document(
    path: &ContentPath,
    kind: DocumentKind,
    doc: &Value,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    match kind {
        DocumentKind::Catalog => validate_catalog(path, doc, &mut issues),
        DocumentKind::Index => validate_index(path, doc, &mut issues),
        DocumentKind::Pack => validate_pack(path, doc, &mut issues),
        DocumentKind::BundleDefinition => validate_bundle_definition(path, doc, &mut issues),
    }
    issues
}

fn schema_error(
    path: &ContentPath,
    field: impl Into<String>,
    message: impl Into<String>,
) -> ValidationIssue {
    ValidationIssue::error(IssueKind::Schema, path.clone(), field, message)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check an object against a field table. Returns false (after recording an
/// issue) when the value is not an object at all.
fn check_fields(
    path: &ContentPath,
    pointer: &str,
    value: &Value,
    table: &[FieldSpec],
    issues: &mut Vec<ValidationIssue>,
) -> bool {
    let Some(obj) = value.as_object() else {
        issues.push(schema_error(
            path,
            pointer,
            format!("expected object, got {}", type_name(value)),
        ));
        return false;
    };

    for spec in table {
        let field_pointer = format!("{pointer}/{}", spec.name);
        match obj.get(spec.name) {
            None => {
                if spec.required {
                    issues.push(schema_error(
                        path,
                        field_pointer,
                        format!("missing required field (expected {})", spec.ty.describe()),
                    ));
                }
            }
            Some(v) if !spec.ty.matches(v) => {
                issues.push(schema_error(
                    path,
                    field_pointer,
                    format!("expected {}, got {}", spec.ty.describe(), type_name(v)),
                ));
            }
            Some(_) => {}
        }
    }
    true
}

/// Validate that a string field parses into a closed vocabulary.
fn check_enum<T: FromStr>(
    path: &ContentPath,
    pointer: &str,
    value: &Value,
    vocabulary: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<T> {
    let s = value.as_str()?;
    match s.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            issues.push(schema_error(
                path,
                pointer,
                format!("expected {vocabulary}, got {s:?}"),
            ));
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

fn validate_catalog(path: &ContentPath, doc: &Value, issues: &mut Vec<ValidationIssue>) {
    if !check_fields(path, "", doc, CATALOG_FIELDS, issues) {
        return;
    }
    let Some(sections) = doc.get("sections").and_then(|v| v.as_array()) else {
        return;
    };
    for (i, section) in sections.iter().enumerate() {
        let pointer = format!("/sections/{i}");
        if !check_fields(path, &pointer, section, SECTION_FIELDS, issues) {
            continue;
        }
        if let Some(kind) = section.get("kind") {
            check_enum::<SectionKind>(path, &format!("{pointer}/kind"), kind, "section kind", issues);
        }
    }
}

// ---------------------------------------------------------------------------
// Index
// ---------------------------------------------------------------------------

fn validate_index(path: &ContentPath, doc: &Value, issues: &mut Vec<ValidationIssue>) {
    if !check_fields(path, "", doc, INDEX_FIELDS, issues) {
        return;
    }

    if let Some(page) = doc.get("page").and_then(|v| v.as_u64()) {
        if page < 1 {
            issues.push(schema_error(
                path,
                "/page",
                format!("expected page number >= 1, got {page}"),
            ));
        }
    }
    if let Some(size) = doc.get("pageSize").and_then(|v| v.as_u64()) {
        if size == 0 {
            issues.push(schema_error(path, "/pageSize", "expected pageSize > 0, got 0"));
        }
    }

    // nextPage is required on every page: a string pointer on non-terminal
    // pages, explicit null on the terminal page.
    match doc.get("nextPage") {
        None => issues.push(schema_error(
            path,
            "/nextPage",
            "missing required field (expected string or null)",
        )),
        Some(v) if !v.is_string() && !v.is_null() => issues.push(schema_error(
            path,
            "/nextPage",
            format!("expected string or null, got {}", type_name(v)),
        )),
        Some(_) => {}
    }

    let Some(items) = doc.get("items").and_then(|v| v.as_array()) else {
        return;
    };
    for (i, item) in items.iter().enumerate() {
        let pointer = format!("/items/{i}");
        if !check_fields(path, &pointer, item, PACK_REF_FIELDS, issues) {
            continue;
        }
        if let Some(ty) = item.get("type") {
            check_enum::<PackType>(path, &format!("{pointer}/type"), ty, "pack type", issues);
        }
        if let Some(level) = item.get("level") {
            check_enum::<CefrLevel>(
                path,
                &format!("{pointer}/level"),
                level,
                "CEFR level code",
                issues,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Pack
// ---------------------------------------------------------------------------

fn validate_pack(path: &ContentPath, doc: &Value, issues: &mut Vec<ValidationIssue>) {
    if !check_fields(path, "", doc, PACK_FIELDS, issues) {
        return;
    }

    let pack_type = doc
        .get("type")
        .and_then(|ty| check_enum::<PackType>(path, "/type", ty, "pack type", issues));
    if let Some(level) = doc.get("level") {
        check_enum::<CefrLevel>(path, "/level", level, "CEFR level code", issues);
    }

    if let Some(tags) = doc.get("tags").and_then(|v| v.as_array()) {
        for (i, tag) in tags.iter().enumerate() {
            if !tag.is_string() {
                issues.push(schema_error(
                    path,
                    format!("/tags/{i}"),
                    format!("expected string, got {}", type_name(tag)),
                ));
            }
        }
    }

    let Some(items) = doc.get("items").and_then(|v| v.as_array()) else {
        return;
    };
    // The item table is selected by the pack type tag; without a valid
    // type there is no shape to check items against.
    let Some(pack_type) = pack_type else {
        return;
    };
    let table = match pack_type {
        PackType::Context => CONTEXT_ITEM_FIELDS,
        PackType::Exam => EXAM_ITEM_FIELDS,
        PackType::Mechanics => DRILL_ITEM_FIELDS,
    };
    for (i, item) in items.iter().enumerate() {
        let pointer = format!("/items/{i}");
        if !check_fields(path, &pointer, item, table, issues) {
            continue;
        }
        if pack_type == PackType::Exam {
            if let Some(options) = item.get("options").and_then(|v| v.as_array()) {
                for (j, option) in options.iter().enumerate() {
                    if !option.is_string() {
                        issues.push(schema_error(
                            path,
                            format!("{pointer}/options/{j}"),
                            format!("expected string, got {}", type_name(option)),
                        ));
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Bundle definition
// ---------------------------------------------------------------------------

/// True if `s` is a kebab-case identifier: lowercase alphanumeric runs
/// joined by single hyphens.
fn is_kebab_case(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn validate_bundle_definition(path: &ContentPath, doc: &Value, issues: &mut Vec<ValidationIssue>) {
    if !check_fields(path, "", doc, BUNDLE_FIELDS, issues) {
        return;
    }

    if let Some(version) = doc.get("version").and_then(|v| v.as_u64()) {
        if version != BUNDLE_SCHEMA_VERSION {
            issues.push(schema_error(
                path,
                "/version",
                format!("expected fixed schema version {BUNDLE_SCHEMA_VERSION}, got {version}"),
            ));
        }
    }

    if let Some(id) = doc.get("id").and_then(|v| v.as_str()) {
        if !is_kebab_case(id) {
            issues.push(schema_error(
                path,
                "/id",
                format!("expected kebab-case identifier, got {id:?}"),
            ));
        }
    }

    if let Some(description) = doc.get("description").and_then(|v| v.as_str()) {
        let chars = description.chars().count();
        if chars > MAX_DESCRIPTION_CHARS {
            issues.push(schema_error(
                path,
                "/description",
                format!("expected at most {MAX_DESCRIPTION_CHARS} characters, got {chars}"),
            ));
        }
    }

    if let Some(filters) = doc.get("filters").and_then(|v| v.as_object()) {
        for (key, value) in filters {
            let pointer = format!("/filters/{key}");
            match key.as_str() {
                "scenario" | "primaryStructure" => {
                    if !value.is_string() {
                        issues.push(schema_error(
                            path,
                            pointer,
                            format!("expected string, got {}", type_name(value)),
                        ));
                    }
                }
                "register" => {
                    if value.is_string() {
                        check_enum::<Register>(path, &pointer, value, "register", issues);
                    } else {
                        issues.push(schema_error(
                            path,
                            pointer,
                            format!("expected string, got {}", type_name(value)),
                        ));
                    }
                }
                "levels" => match value.as_array() {
                    Some(levels) => {
                        for (i, level) in levels.iter().enumerate() {
                            let level_pointer = format!("{pointer}/{i}");
                            if level.is_string() {
                                check_enum::<CefrLevel>(
                                    path,
                                    &level_pointer,
                                    level,
                                    "CEFR level code",
                                    issues,
                                );
                            } else {
                                issues.push(schema_error(
                                    path,
                                    level_pointer,
                                    format!("expected string, got {}", type_name(level)),
                                ));
                            }
                        }
                    }
                    None => issues.push(schema_error(
                        path,
                        pointer,
                        format!("expected array, got {}", type_name(value)),
                    )),
                },
                other => issues.push(schema_error(
                    path,
                    format!("/filters/{other}"),
                    "unknown filter field",
                )),
            }
        }
    }

    if let Some(kinds) = doc.get("includeKinds").and_then(|v| v.as_array()) {
        if kinds.is_empty() {
            issues.push(schema_error(
                path,
                "/includeKinds",
                "expected non-empty set of item kinds",
            ));
        }
        for (i, kind) in kinds.iter().enumerate() {
            let pointer = format!("/includeKinds/{i}");
            if kind.is_string() {
                check_enum::<ItemKind>(path, &pointer, kind, "item kind", issues);
            } else {
                issues.push(schema_error(
                    path,
                    pointer,
                    format!("expected string, got {}", type_name(kind)),
                ));
            }
        }
    }

    if let Some(ordering) = doc.get("ordering").and_then(|v| v.as_object()) {
        match ordering.get("by") {
            None => issues.push(schema_error(
                path,
                "/ordering/by",
                "missing required field (expected array of ordering keys)",
            )),
            Some(by) => match by.as_array() {
                Some(keys) => {
                    for (i, key) in keys.iter().enumerate() {
                        let pointer = format!("/ordering/by/{i}");
                        if key.is_string() {
                            check_enum::<SortKey>(path, &pointer, key, "ordering key", issues);
                        } else {
                            issues.push(schema_error(
                                path,
                                pointer,
                                format!("expected string, got {}", type_name(key)),
                            ));
                        }
                    }
                }
                None => issues.push(schema_error(
                    path,
                    "/ordering/by",
                    format!("expected array, got {}", type_name(by)),
                )),
            },
        }

        // Determinism is a hard invariant of the engine; the flag documents
        // the author's expectation and must be asserted explicitly.
        match ordering.get("stable") {
            Some(Value::Bool(true)) => {}
            Some(Value::Bool(false)) => issues.push(schema_error(
                path,
                "/ordering/stable",
                "expected true (the engine always sorts stably; the flag must assert it), got false",
            )),
            Some(v) => issues.push(schema_error(
                path,
                "/ordering/stable",
                format!("expected true, got {}", type_name(v)),
            )),
            None => issues.push(schema_error(
                path,
                "/ordering/stable",
                "missing required field (expected true)",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_path() -> ContentPath {
        ContentPath::new("/v1/test.json")
    }

    fn valid_catalog() -> Value {
        json!({
            "workspace": "de",
            "language": "German",
            "sections": [
                {
                    "id": "context",
                    "kind": "context",
                    "title": "Everyday Situations",
                    "itemsUrl": "/v1/workspaces/de/context/index.json"
                }
            ]
        })
    }

    fn valid_index() -> Value {
        json!({
            "page": 1,
            "pageSize": 50,
            "items": [
                {
                    "id": "pack-001",
                    "title": "Beim Arzt",
                    "type": "context",
                    "level": "A1",
                    "durationMins": 12,
                    "packUrl": "/v1/packs/pack-001.json"
                }
            ],
            "nextPage": null,
            "total": 1
        })
    }

    fn valid_pack() -> Value {
        json!({
            "id": "pack-001",
            "type": "context",
            "title": "Beim Arzt",
            "language": "de",
            "level": "A1",
            "durationMins": 12,
            "tags": ["scenario:doctor"],
            "items": [
                {
                    "id": "item-1",
                    "text": "Ich habe Kopfschmerzen.",
                    "translation": "I have a headache.",
                    "audioUrl": "/v1/audio/pack-001/item-1.mp3"
                }
            ]
        })
    }

    fn valid_bundle() -> Value {
        json!({
            "version": 1,
            "id": "doctor-a1",
            "workspace": "de",
            "title": "Doctor visits, A1",
            "description": "Beginner packs for medical scenarios.",
            "filters": {"scenario": "doctor", "levels": ["A1"]},
            "includeKinds": ["pack"],
            "ordering": {"by": ["level", "title"], "stable": true}
        })
    }

    #[test]
    fn test_valid_documents_produce_no_issues() {
        let p = doc_path();
        assert!(validate_document(&p, DocumentKind::Catalog, &valid_catalog()).is_empty());
        assert!(validate_document(&p, DocumentKind::Index, &valid_index()).is_empty());
        assert!(validate_document(&p, DocumentKind::Pack, &valid_pack()).is_empty());
        assert!(
            validate_document(&p, DocumentKind::BundleDefinition, &valid_bundle()).is_empty()
        );
    }

    #[test]
    fn test_validation_is_deterministic() {
        let p = doc_path();
        let mut bad = valid_pack();
        bad["level"] = json!("X7");
        bad.as_object_mut().unwrap().remove("title");
        let first = validate_document(&p, DocumentKind::Pack, &bad);
        let second = validate_document(&p, DocumentKind::Pack, &bad);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_catalog_missing_fields_accumulate() {
        let p = doc_path();
        let issues = validate_document(&p, DocumentKind::Catalog, &json!({}));
        // workspace, language, sections — all reported, not just the first.
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_catalog_bad_section_kind() {
        let p = doc_path();
        let mut catalog = valid_catalog();
        catalog["sections"][0]["kind"] = json!("drills");
        let issues = validate_document(&p, DocumentKind::Catalog, &catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "/sections/0/kind");
        assert!(issues[0].message.contains("drills"));
    }

    #[test]
    fn test_index_page_zero_rejected() {
        let p = doc_path();
        let mut index = valid_index();
        index["page"] = json!(0);
        let issues = validate_document(&p, DocumentKind::Index, &index);
        assert!(issues.iter().any(|i| i.field == "/page"));
    }

    #[test]
    fn test_index_page_size_zero_rejected() {
        let p = doc_path();
        let mut index = valid_index();
        index["pageSize"] = json!(0);
        let issues = validate_document(&p, DocumentKind::Index, &index);
        assert!(issues.iter().any(|i| i.field == "/pageSize"));
    }

    #[test]
    fn test_index_negative_duration_rejected() {
        let p = doc_path();
        let mut index = valid_index();
        index["items"][0]["durationMins"] = json!(-3);
        let issues = validate_document(&p, DocumentKind::Index, &index);
        assert!(issues
            .iter()
            .any(|i| i.field == "/items/0/durationMins" && i.message.contains("non-negative")));
    }

    #[test]
    fn test_index_missing_next_page_key() {
        let p = doc_path();
        let mut index = valid_index();
        index.as_object_mut().unwrap().remove("nextPage");
        let issues = validate_document(&p, DocumentKind::Index, &index);
        assert!(issues.iter().any(|i| i.field == "/nextPage"));
    }

    #[test]
    fn test_pack_item_table_follows_type() {
        let p = doc_path();
        let mut pack = valid_pack();
        pack["type"] = json!("exam");
        // Items are context-shaped, so every exam field is missing.
        let issues = validate_document(&p, DocumentKind::Pack, &pack);
        assert!(issues.iter().any(|i| i.field == "/items/0/question"));
        assert!(issues.iter().any(|i| i.field == "/items/0/correctAnswer"));
    }

    #[test]
    fn test_pack_unknown_type_skips_item_tables() {
        let p = doc_path();
        let mut pack = valid_pack();
        pack["type"] = json!("vocabulary");
        let issues = validate_document(&p, DocumentKind::Pack, &pack);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "/type");
    }

    #[test]
    fn test_pack_non_string_tag() {
        let p = doc_path();
        let mut pack = valid_pack();
        pack["tags"] = json!(["ok", 7]);
        let issues = validate_document(&p, DocumentKind::Pack, &pack);
        assert!(issues.iter().any(|i| i.field == "/tags/1"));
    }

    #[test]
    fn test_drill_items_require_prompt() {
        let p = doc_path();
        let pack = json!({
            "id": "drill-pack",
            "type": "mechanics",
            "title": "Präsens",
            "language": "de",
            "level": "A2",
            "durationMins": 8,
            "tags": [],
            "items": [{"id": "d-1"}]
        });
        let issues = validate_document(&p, DocumentKind::Pack, &pack);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "/items/0/prompt");
    }

    #[test]
    fn test_bundle_wrong_version() {
        let p = doc_path();
        let mut bundle = valid_bundle();
        bundle["version"] = json!(2);
        let issues = validate_document(&p, DocumentKind::BundleDefinition, &bundle);
        assert!(issues.iter().any(|i| i.field == "/version"));
    }

    #[test]
    fn test_bundle_id_must_be_kebab_case() {
        let p = doc_path();
        for bad in ["Doctor-A1", "doctor_a1", "-doctor", "doctor-", "a--b", ""] {
            let mut bundle = valid_bundle();
            bundle["id"] = json!(bad);
            let issues = validate_document(&p, DocumentKind::BundleDefinition, &bundle);
            assert!(
                issues.iter().any(|i| i.field == "/id"),
                "id {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_bundle_description_too_long() {
        let p = doc_path();
        let mut bundle = valid_bundle();
        bundle["description"] = json!("x".repeat(MAX_DESCRIPTION_CHARS + 1));
        let issues = validate_document(&p, DocumentKind::BundleDefinition, &bundle);
        assert!(issues.iter().any(|i| i.field == "/description"));
    }

    #[test]
    fn test_bundle_unknown_filter_field() {
        let p = doc_path();
        let mut bundle = valid_bundle();
        bundle["filters"]["difficulty"] = json!("hard");
        let issues = validate_document(&p, DocumentKind::BundleDefinition, &bundle);
        assert!(issues.iter().any(|i| i.field == "/filters/difficulty"));
    }

    #[test]
    fn test_bundle_empty_include_kinds() {
        let p = doc_path();
        let mut bundle = valid_bundle();
        bundle["includeKinds"] = json!([]);
        let issues = validate_document(&p, DocumentKind::BundleDefinition, &bundle);
        assert!(issues.iter().any(|i| i.field == "/includeKinds"));
    }

    #[test]
    fn test_bundle_stable_false_rejected() {
        let p = doc_path();
        let mut bundle = valid_bundle();
        bundle["ordering"]["stable"] = json!(false);
        let issues = validate_document(&p, DocumentKind::BundleDefinition, &bundle);
        assert!(issues.iter().any(|i| i.field == "/ordering/stable"));
    }

    #[test]
    fn test_bundle_stable_absent_rejected() {
        let p = doc_path();
        let mut bundle = valid_bundle();
        bundle["ordering"].as_object_mut().unwrap().remove("stable");
        let issues = validate_document(&p, DocumentKind::BundleDefinition, &bundle);
        assert!(issues.iter().any(|i| i.field == "/ordering/stable"));
    }

    #[test]
    fn test_bundle_unknown_ordering_key() {
        let p = doc_path();
        let mut bundle = valid_bundle();
        bundle["ordering"]["by"] = json!(["level", "durationMins"]);
        let issues = validate_document(&p, DocumentKind::BundleDefinition, &bundle);
        assert!(issues.iter().any(|i| i.field == "/ordering/by/1"));
    }

    #[test]
    fn test_is_kebab_case() {
        assert!(is_kebab_case("doctor-a1"));
        assert!(is_kebab_case("a"));
        assert!(is_kebab_case("a1-b2-c3"));
        assert!(!is_kebab_case("A-b"));
        assert!(!is_kebab_case("a_b"));
        assert!(!is_kebab_case("a b"));
    }

    proptest::proptest! {
        #[test]
        fn prop_kebab_case_accepts_canonical_form(
            id in "[a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,3}"
        ) {
            proptest::prop_assert!(is_kebab_case(&id));
        }

        #[test]
        fn prop_kebab_case_rejects_uppercase(s in "[a-z]{0,4}[A-Z][a-z]{0,4}") {
            proptest::prop_assert!(!is_kebab_case(&s));
        }
    }
}
