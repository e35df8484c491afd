//! mdform — bidirectional conversion between a constrained markdown dialect
//! ("heading = key, following content = value") and schema-validated data
//! objects.
//!
//! The dialect targets markdown-based forms (issue templates and the like)
//! that must be parsed into typed records, and the reverse: rendering a
//! typed record as readable markdown.
//!
//! # Modules
//!
//! - [`tree`]: Block tree shared by both pipelines
//! - [`extract`]: Markdown → object extraction
//! - [`serialize`]: Object → markdown rendering
//! - [`error`]: Error types and Result alias
//!
//! # Example
//!
//! ```rust
//! use mdform::{
//!     markdown_to_object, object_to_markdown, ExtractOptions, RenderOptions,
//! };
//! use mdform_core::{FieldDef, FieldType, ObjectSchema};
//!
//! let schema = ObjectSchema::new(vec![
//!     FieldDef::new("name", FieldType::Text),
//!     FieldDef::new("tags", FieldType::Array(Box::new(FieldType::Text))),
//! ]);
//!
//! let markdown = "### Name\n\nAda\n\n### Tags\n\n- math\n- engines\n";
//! let object = markdown_to_object(markdown, &schema, &ExtractOptions::default()).unwrap();
//! assert_eq!(object["name"], serde_json::json!("Ada"));
//! assert_eq!(object["tags"], serde_json::json!(["math", "engines"]));
//!
//! let rendered = object_to_markdown(&object, &schema, &RenderOptions::default());
//! assert_eq!(rendered, "### name\n\nAda\n\n### tags\n\n- math\n- engines");
//! ```
//!
//! # Concurrency
//!
//! Both entry points are pure functions of their inputs: transient trees and
//! mappings are scoped to the call and no state is shared across calls, so
//! concurrent independent conversions are safe.

pub mod error;
pub mod extract;
pub mod serialize;
pub mod tree;

// Re-export the entry points and their option types at crate root
pub use error::{Error, Result};
pub use extract::{ExtractOptions, NULL_PLACEHOLDER, markdown_to_object};
pub use serialize::{RenderOptions, object_to_markdown};
pub use tree::{Block, parse_blocks, render_blocks};

// Re-export the schema capability so callers need only one crate
pub use mdform_core::{
    FieldDef, FieldShape, FieldType, ObjectSchema, Schema, Transform, TypedObject,
    ValidationError,
};
