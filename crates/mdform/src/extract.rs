//! Markdown → object extraction.
//!
//! Walks the top-level blocks of a document in order, tracking the "current
//! key" set by the most recent recognized heading, and accumulates paragraph
//! and list content into a raw mapping per key. The accumulated mapping is
//! then handed to the schema for coercion and validation.
//!
//! Accumulation is additive: multiple blocks under one heading build up a
//! field's value rather than overwriting it, so a value may come from an
//! interleaved sequence of paragraphs and lists. Array and scalar handling
//! is symmetric between the two block kinds — authors can use either list
//! notation or line-per-item paragraphs.

use std::collections::HashMap;

use mdform_core::{FieldShape, RawMap, RawValue, Schema, TypedObject, normalize_key};

use crate::error::Result;
use crate::tree::{Block, parse_blocks};

/// The paragraph text some form generators emit for an unanswered optional
/// field, rendered as `_No response_`.
pub const NULL_PLACEHOLDER: &str = "No response";

/// Options for [`markdown_to_object`].
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Treat an emphasized paragraph reading exactly `No response` as an
    /// explicit empty value and ignore it. Defaults to `true`.
    pub form_null_placeholder: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            form_null_placeholder: true,
        }
    }
}

/// Convert markdown text into a schema-validated object.
///
/// Headings of any depth are matched against the schema's declared field
/// names after [`normalize_key`] canonicalization on both sides. Content
/// before the first recognized heading, and content under unrecognized
/// headings, is dropped. Fails only when the schema rejects the accumulated
/// raw mapping.
pub fn markdown_to_object<S: Schema + ?Sized>(
    markdown: &str,
    schema: &S,
    options: &ExtractOptions,
) -> Result<TypedObject> {
    let lookup: HashMap<String, String> = schema
        .field_names()
        .into_iter()
        .map(|name| (normalize_key(&name), name))
        .collect();

    let mut raw = RawMap::new();
    let mut cursor: Option<String> = None;

    for block in parse_blocks(markdown) {
        match block {
            Block::Heading { text, .. } => {
                cursor = lookup.get(&normalize_key(&text)).cloned();
                if cursor.is_none() {
                    log::debug!("dropping content under unrecognized heading {text:?}");
                }
            }
            Block::List { items } => {
                let Some(field) = cursor.as_deref() else {
                    continue;
                };
                let items: Vec<String> = items
                    .iter()
                    .map(|item| item.trim().to_string())
                    .filter(|item| !item.is_empty())
                    .collect();
                if items.is_empty() {
                    continue;
                }
                if is_array_field(schema, field) {
                    entry(&mut raw, field, FieldShape::Array).push_items(items);
                } else {
                    entry(&mut raw, field, FieldShape::Scalar).push_text(&items.join("\n"));
                }
            }
            Block::Paragraph {
                text,
                emphasis_lead,
            } => {
                let Some(field) = cursor.as_deref() else {
                    continue;
                };
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                if options.form_null_placeholder && emphasis_lead && text == NULL_PLACEHOLDER {
                    continue;
                }
                if is_array_field(schema, field) {
                    let lines: Vec<String> = text
                        .split('\n')
                        .map(|line| line.trim().to_string())
                        .filter(|line| !line.is_empty())
                        .collect();
                    if lines.is_empty() {
                        continue;
                    }
                    entry(&mut raw, field, FieldShape::Array).push_items(lines);
                } else {
                    entry(&mut raw, field, FieldShape::Scalar).push_text(text);
                }
            }
        }
    }

    Ok(schema.validate(raw)?)
}

/// The cursor only ever holds declared field names, so an unknown shape can
/// only mean a schema whose introspection disagrees with its field list;
/// treat it as scalar.
fn is_array_field<S: Schema + ?Sized>(schema: &S, field: &str) -> bool {
    schema
        .field_shape(field)
        .is_some_and(FieldShape::is_array)
}

fn entry<'a>(raw: &'a mut RawMap, field: &str, shape: FieldShape) -> &'a mut RawValue {
    raw.entry(field.to_string()).or_insert_with(|| match shape {
        FieldShape::Array => RawValue::Items(Vec::new()),
        FieldShape::Scalar => RawValue::Text(String::new()),
    })
}
