//! Validation error types for mdform-core.

use thiserror::Error;

/// Result type alias for schema validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// The declared field name that failed.
    pub field: String,
    /// What went wrong (missing, uncoercible, out of range, ...).
    pub message: String,
}

impl FieldIssue {
    /// Create an issue for a named field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Aggregate validation failure for a raw mapping.
///
/// Validation is all-or-nothing: every failing field is collected before the
/// error is returned, so callers can report all problems at once rather than
/// fixing them one at a time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("validation failed: {}", format_issues(.issues))]
pub struct ValidationError {
    /// Per-field failures, in schema declaration order.
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Create an error from a non-empty list of field issues.
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Names of the fields that failed validation.
    pub fn failed_fields(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.field.as_str()).collect()
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
