//! Object → markdown serialization.
//!
//! Iterates an ordered field list, skips omittable values, and emits one
//! heading per surviving field followed by either a list block (arrays) or
//! one paragraph per line (scalars). The assembled block tree is rendered
//! with `-` bullets, tight lists, and escaped literal text, then trimmed.
//!
//! The omission rule is deliberately asymmetric: null and empty-after-trim
//! strings are omitted, but numeric `0` and boolean `false` are not. That
//! asymmetry is what makes round trips with falsy data lossless.

use serde_json::Value;

use mdform_core::{Schema, TypedObject};

use crate::tree::{Block, render_blocks};

/// Options for [`object_to_markdown`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Field emission order. Defaults to the schema's declaration order.
    pub output_order: Option<Vec<String>>,
    /// Heading depth for field headings, clamped to 1–6. Defaults to 3.
    pub heading_depth: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            output_order: None,
            heading_depth: 3,
        }
    }
}

/// Render a typed object as markdown in the heading-per-field dialect.
///
/// Fields absent from the iteration order are ignored, as are object keys
/// the schema does not declare. Does not fail on schema-conformant input.
pub fn object_to_markdown<S: Schema + ?Sized>(
    object: &TypedObject,
    schema: &S,
    options: &RenderOptions,
) -> String {
    let order = match &options.output_order {
        Some(order) => order.clone(),
        None => schema.field_names(),
    };

    let mut blocks: Vec<Block> = Vec::new();

    for field in &order {
        let Some(value) = object.get(field) else {
            continue;
        };
        if should_omit(value) {
            continue;
        }

        let heading = Block::Heading {
            depth: options.heading_depth,
            text: field.clone(),
        };

        match value {
            Value::Array(elements) => {
                // Survivors are computed before the heading is committed so
                // an all-filtered array leaves no dangling heading behind.
                let items: Vec<String> = elements
                    .iter()
                    .filter(|element| !should_omit(element))
                    .filter_map(scalar_text)
                    .map(|text| text.trim().to_string())
                    .filter(|text| !text.is_empty())
                    .collect();
                if items.is_empty() {
                    continue;
                }
                blocks.push(heading);
                blocks.push(Block::List { items });
            }
            scalar => {
                let Some(text) = scalar_text(scalar) else {
                    continue;
                };
                let lines: Vec<String> = text
                    .split('\n')
                    .map(|line| line.trim().to_string())
                    .filter(|line| !line.is_empty())
                    .collect();
                if lines.is_empty() {
                    continue;
                }
                blocks.push(heading);
                for line in lines {
                    blocks.push(Block::Paragraph {
                        text: line,
                        emphasis_lead: false,
                    });
                }
            }
        }
    }

    render_blocks(&blocks)
}

/// Whether a value is omitted from output entirely.
///
/// Only null and blank strings are omittable; `0` and `false` always render.
fn should_omit(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

/// Stringify a scalar value for rendering. Nested structures fall back to
/// compact JSON.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        nested => Some(nested.to_string()),
    }
}
