//! # Snapshot Loader — the Filesystem Boundary
//!
//! Reads a content tree root directory into an immutable [`Snapshot`].
//! Every `*.json` file under the root is parsed and keyed by its versioned
//! corpus path (`/v1/` + the root-relative path with `/` separators).
//!
//! This is the only module in the engine that performs I/O. Unparseable
//! JSON is fatal for the run and is reported with the offending file path;
//! all other defects are left to the validators, which operate on the
//! loaded snapshot and accumulate issue records instead of failing.
//!
//! Bundle definitions are loaded separately via [`load_definition_file`],
//! which accepts JSON or YAML (authors write definitions by hand; the
//! catalog tree itself is always JSON).

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use glossa_core::{ContentPath, VERSION_PREFIX};

use crate::snapshot::Snapshot;

/// Error constructing a snapshot or loading a definition file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A document file could not be parsed.
    #[error("unparseable document '{path}': {reason}")]
    UnparseableDocument {
        /// Path to the offending file.
        path: String,
        /// Parse failure detail.
        reason: String,
    },

    /// The content root is missing or unreadable.
    #[error("cannot read content root '{path}': {reason}")]
    UnreadableRoot {
        /// The root directory that was given.
        path: String,
        /// Failure detail.
        reason: String,
    },

    /// IO error reading a document file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a content tree rooted at `root` into a snapshot.
///
/// `root` is the directory corresponding to the version prefix: a file at
/// `<root>/workspaces/de/catalog.json` is keyed as
/// `/v1/workspaces/de/catalog.json`. Non-JSON files are ignored.
///
/// # Errors
///
/// Returns `LoadError::UnparseableDocument` for the first file that is not
/// valid JSON — a malformed document makes the whole run unusable — and
/// `LoadError::UnreadableRoot` if the root directory cannot be read.
pub fn load_snapshot(root: &Path) -> Result<Snapshot, LoadError> {
    if !root.is_dir() {
        return Err(LoadError::UnreadableRoot {
            path: root.display().to_string(),
            reason: "not a directory".to_string(),
        });
    }

    let mut documents = BTreeMap::new();
    collect_documents(root, root, &mut documents)?;
    tracing::debug!(count = documents.len(), root = %root.display(), "loaded content snapshot");
    Ok(Snapshot::from_documents(documents))
}

/// Recursively collect `*.json` documents under `dir`.
fn collect_documents(
    root: &Path,
    dir: &Path,
    documents: &mut BTreeMap<ContentPath, Value>,
) -> Result<(), LoadError> {
    let entries = std::fs::read_dir(dir).map_err(|e| LoadError::UnreadableRoot {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_documents(root, &path, documents)?;
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let content = std::fs::read_to_string(&path)?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| LoadError::UnparseableDocument {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        documents.insert(corpus_path(root, &path), value);
    }
    Ok(())
}

/// Map a filesystem path under `root` to its versioned corpus path.
fn corpus_path(root: &Path, file: &Path) -> ContentPath {
    let rel = file.strip_prefix(root).unwrap_or(file);
    let rel = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    ContentPath::new(format!("{VERSION_PREFIX}{rel}"))
}

/// Load a bundle definition file as a JSON value.
///
/// Accepts `.json`, `.yaml`, and `.yml`; YAML is converted to the
/// JSON-compatible value tree before validation.
pub fn load_definition_file(path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(&content).map_err(|e| LoadError::UnparseableDocument {
                    path: path.display().to_string(),
                    reason: format!("invalid YAML: {e}"),
                })?;
            yaml_to_json_value(&yaml).map_err(|reason| LoadError::UnparseableDocument {
                path: path.display().to_string(),
                reason,
            })
        }
        _ => serde_json::from_str(&content).map_err(|e| LoadError::UnparseableDocument {
            path: path.display().to_string(),
            reason: format!("invalid JSON: {e}"),
        }),
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Bundle definitions use only the JSON-compatible subset of YAML; tags are
/// ignored and non-string map keys are rejected.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
