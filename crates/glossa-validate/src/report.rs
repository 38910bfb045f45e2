//! # Validation Issues and Report Aggregation
//!
//! Every validator returns a list of [`ValidationIssue`] records; the
//! caller merges them into a [`ValidationReport`]. No validator writes to
//! shared state — aggregation is explicit and the merged report is the only
//! place where run-level questions ("were there hard errors?") are asked.
//!
//! The report renders grouped by document in lexicographic path order, so
//! two runs over the same snapshot produce byte-identical output.

use std::collections::BTreeMap;
use std::fmt;

use glossa_core::ContentPath;

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Non-fatal; surfaced but does not fail the run.
    Warning,
    /// Hard failure for the issue's scope.
    Error,
}

impl Severity {
    /// Uppercase label used in rendered reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Warning => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// Which validator family produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// Missing or malformed field (SchemaValidator).
    Schema,
    /// Dangling or mismatched-id reference (ReferenceResolver).
    Reference,
    /// Broken, cyclic, or inconsistent page chain (PaginationChainValidator).
    Pagination,
    /// Malformed localized map or missing fallback locale (I18nValidator).
    I18n,
}

impl IssueKind {
    /// Short label used in rendered reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Reference => "reference",
            Self::Pagination => "pagination",
            Self::I18n => "i18n",
        }
    }
}

/// A single validation finding: which document, which field, what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Corpus path of the offending document.
    pub document: ContentPath,
    /// JSON-pointer-style path of the offending field within the document,
    /// or empty for document-level issues.
    pub field: String,
    /// Human-readable description, including expected vs actual where known.
    pub message: String,
    /// Validator family.
    pub kind: IssueKind,
    /// Severity.
    pub severity: Severity,
}

impl ValidationIssue {
    /// Construct a hard error.
    pub fn error(
        kind: IssueKind,
        document: ContentPath,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            document,
            field: field.into(),
            message: message.into(),
            kind,
            severity: Severity::Error,
        }
    }

    /// Construct a warning.
    pub fn warning(
        kind: IssueKind,
        document: ContentPath,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            document,
            field: field.into(),
            message: message.into(),
            kind,
            severity: Severity::Warning,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(
                f,
                "  [{} {}] (root): {}",
                self.severity.label(),
                self.kind.label(),
                self.message
            )
        } else {
            write!(
                f,
                "  [{} {}] {}: {}",
                self.severity.label(),
                self.kind.label(),
                self.field,
                self.message
            )
        }
    }
}

/// Accumulated result of a validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single issue.
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Merge a validator's issue list into this report.
    pub fn extend(&mut self, issues: Vec<ValidationIssue>) {
        self.issues.extend(issues);
    }

    /// All issues in insertion order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// True if any hard error was recorded.
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.severity == Severity::Error)
    }

    /// Number of hard errors.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Issues grouped by document, in lexicographic path order.
    pub fn by_document(&self) -> BTreeMap<&ContentPath, Vec<&ValidationIssue>> {
        let mut grouped: BTreeMap<&ContentPath, Vec<&ValidationIssue>> = BTreeMap::new();
        for issue in &self.issues {
            grouped.entry(&issue.document).or_default().push(issue);
        }
        grouped
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (document, issues) in self.by_document() {
            writeln!(f, "{document}")?;
            for issue in issues {
                writeln!(f, "{issue}")?;
            }
        }
        write!(
            f,
            "{} error(s), {} warning(s)",
            self.error_count(),
            self.warning_count()
        )
    }
}
