//! # Bundle Resolution Pipeline
//!
//! Turns a bundle definition plus a loaded corpus snapshot into a
//! [`ResolvedBundle`]: validate the definition, flatten the declared
//! workspace, filter, order, and reject empty results. Resolution is a
//! pure function of its inputs; resolving the same definition against the
//! same snapshot always yields the identical item sequence.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use glossa_catalog::{DocumentKind, Snapshot};
use glossa_core::{ContentPath, GlossaError};
use glossa_validate::{schema, ValidationReport};

use crate::corpus::{self, CorpusItem};
use crate::definition::BundleDefinition;
use crate::{filter, order};

/// Why a bundle could not be resolved.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The definition document failed schema validation.
    #[error("invalid bundle definition:\n{report}")]
    Definition {
        /// The schema issues found in the definition.
        report: ValidationReport,
    },
    /// The definition is valid but matched no corpus items. An empty
    /// bundle is a hard failure: publishing one would silently ship
    /// nothing.
    #[error("bundle {bundle_id:?} matched no items in workspace {workspace:?}")]
    Empty {
        /// Identifier of the offending bundle.
        bundle_id: String,
        /// Workspace the definition drew from.
        workspace: String,
    },
    /// The definition passed validation but still failed to parse.
    #[error(transparent)]
    Parse(#[from] GlossaError),
}

/// A successfully resolved bundle: the definition and its ordered items.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedBundle {
    /// The definition the bundle was resolved from.
    pub definition: BundleDefinition,
    /// Matching corpus items in the definition's declared order.
    pub items: Vec<CorpusItem>,
}

impl ResolvedBundle {
    /// Render the bundle as a JSON manifest.
    pub fn to_json(&self) -> Result<Value, GlossaError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Resolve a bundle definition against a corpus snapshot.
pub fn resolve(snapshot: &Snapshot, definition_doc: &Value) -> Result<ResolvedBundle, BundleError> {
    // The definition path only anchors issue records; definitions are
    // supplied out of band, not loaded from the corpus tree.
    let definition_path = ContentPath::new("/definition");
    let issues = schema::validate_document(
        &definition_path,
        DocumentKind::BundleDefinition,
        definition_doc,
    );
    if !issues.is_empty() {
        let mut report = ValidationReport::new();
        report.extend(issues);
        return Err(BundleError::Definition { report });
    }

    let definition = BundleDefinition::from_value(definition_doc)?;
    let flattened = corpus::flatten(snapshot, &definition.workspace);
    let mut items = filter::apply(flattened, &definition);
    if items.is_empty() {
        return Err(BundleError::Empty {
            bundle_id: definition.id,
            workspace: definition.workspace,
        });
    }
    order::sort_items(&mut items, &definition.ordering.by);

    debug!(
        bundle = %definition.id,
        items = items.len(),
        "bundle resolved"
    );
    Ok(ResolvedBundle { definition, items })
}
