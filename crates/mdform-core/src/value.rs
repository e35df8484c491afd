//! Raw accumulated values and the typed output object.
//!
//! During extraction the engine accumulates markdown content per field into a
//! [`RawValue`] before any validation happens. Scalar fields accumulate into
//! [`RawValue::Text`] (multi-block content joined with newlines); array
//! fields accumulate into [`RawValue::Items`] preserving encounter order.

use std::collections::HashMap;

/// The pre-validation value accumulated for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Scalar accumulation; multiple blocks are newline-joined.
    Text(String),
    /// Array accumulation; items in document encounter order.
    Items(Vec<String>),
}

impl RawValue {
    /// Append scalar content, inserting a newline separator when content is
    /// already present. An `Items` accumulation is first flattened to text.
    pub fn push_text(&mut self, text: &str) {
        match self {
            Self::Text(existing) => {
                if existing.is_empty() {
                    existing.push_str(text);
                } else {
                    existing.push('\n');
                    existing.push_str(text);
                }
            }
            Self::Items(items) => {
                let mut joined = items.join("\n");
                if !joined.is_empty() {
                    joined.push('\n');
                }
                joined.push_str(text);
                *self = Self::Text(joined);
            }
        }
    }

    /// Append array items. A `Text` accumulation becomes the first item.
    pub fn push_items(&mut self, new_items: Vec<String>) {
        match self {
            Self::Items(items) => items.extend(new_items),
            Self::Text(existing) => {
                let mut items = vec![std::mem::take(existing)];
                items.extend(new_items);
                *self = Self::Items(items);
            }
        }
    }
}

/// Mapping from declared field name to its accumulated raw value.
///
/// Invariant: only field names declared by the schema are ever inserted;
/// content under unrecognized headings never reaches the map.
pub type RawMap = HashMap<String, RawValue>;

/// The schema-validated output object. Keys are declared field names, values
/// are the schema's coerced output types.
pub type TypedObject = serde_json::Map<String, serde_json::Value>;
