//! Key normalization.
//!
//! Schema field names and markdown heading text are canonicalized through
//! the same function so that matching is case- and surrounding-whitespace-
//! insensitive but otherwise exact: no fuzzy matching, no punctuation
//! normalization.

/// Normalize a field name or heading text for comparison.
///
/// Trims surrounding whitespace, then case-folds to lowercase. Applied
/// symmetrically when building the schema lookup table and when matching
/// heading text during extraction.
///
/// # Examples
///
/// ```
/// use mdform_core::util::keys::normalize_key;
///
/// assert_eq!(normalize_key("  Favorite Color  "), "favorite color");
/// assert_eq!(normalize_key("AGE"), "age");
/// assert_eq!(normalize_key("already normal"), "already normal");
/// ```
pub fn normalize_key(text: &str) -> String {
    text.trim().to_lowercase()
}
