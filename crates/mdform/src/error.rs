//! Error types for the mdform conversion engine.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during conversion.
///
/// Markdown itself never fails to parse (the parser is permissive and treats
/// unparseable constructs as plain text), so the only failure mode is the
/// schema rejecting the accumulated raw mapping.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Schema validation rejected the accumulated raw mapping.
    #[error(transparent)]
    Validation(#[from] mdform_core::ValidationError),
}
