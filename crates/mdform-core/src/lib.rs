//! mdform Core — shared types, schema capability, and validation errors.
//!
//! This crate provides the foundational types used by the mdform conversion
//! engine. It has no internal mdform dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Validation error types and Result alias
//! - [`value`]: Raw accumulated values and the typed output object
//! - [`schema`]: The [`Schema`] capability trait and field shapes
//! - [`object`]: Built-in [`ObjectSchema`] adapter with coercion rules
//! - [`util`]: Key normalization helpers
//!
//! # Design Philosophy
//!
//! **Capability trait, pluggable adapters.** The conversion engine never
//! depends on a concrete validation library; it only asks three things of a
//! schema: list declared fields in order, classify a field as scalar or
//! array, and validate a raw mapping into a typed object. [`ObjectSchema`]
//! is the built-in adapter; callers with their own validation stack can
//! implement [`Schema`] over it instead.

pub mod error;
pub mod object;
pub mod schema;
pub mod util;
pub mod value;

// Re-export key types at crate root for convenience
pub use error::{FieldIssue, Result, ValidationError};
pub use object::{FieldDef, FieldType, ObjectSchema, Transform};
pub use schema::{FieldShape, Schema};
pub use util::keys::normalize_key;
pub use value::{RawMap, RawValue, TypedObject};
