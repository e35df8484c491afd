//! The schema capability trait consumed by the conversion engine.
//!
//! The engine asks exactly three things of a schema: enumerate declared
//! fields in order, classify a field as scalar or array, and validate a raw
//! accumulated mapping into a typed object. Anything that can answer those
//! three questions can drive a conversion; [`crate::ObjectSchema`] is the
//! built-in implementation.

use crate::error::Result;
use crate::value::{RawMap, TypedObject};

/// Effective shape of a declared field, after one level of wrapper unwrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// A single value (text, number, boolean, choice).
    Scalar,
    /// An ordered list of scalar values.
    Array,
}

impl FieldShape {
    /// Whether this shape accumulates as a list.
    pub fn is_array(self) -> bool {
        matches!(self, Self::Array)
    }
}

/// Capability contract for schema introspection and validation.
///
/// Implementations must be deterministic and side-effect free: the engine
/// may call these methods any number of times during a single conversion.
pub trait Schema {
    /// Declared field names, in declaration order.
    fn field_names(&self) -> Vec<String>;

    /// Effective shape of a declared field.
    ///
    /// Returns `None` only for names that are not declared. The engine never
    /// asks about undeclared fields in normal flow; the `Option` exists
    /// defensively.
    ///
    /// Shape resolution unwraps exactly one level of optional/default
    /// wrapping to find the effective type. A field wrapped in two or more
    /// layers is classified by its once-unwrapped type, which may report
    /// `Scalar` for a deeply wrapped array. This is a deliberate
    /// simplification, not full type-algebra unwrapping.
    fn field_shape(&self, name: &str) -> Option<FieldShape>;

    /// Coerce and validate a raw accumulated mapping into a typed object.
    ///
    /// All-or-nothing: either every field coerces and all required fields
    /// are present, or a [`crate::ValidationError`] describing every failing
    /// field is returned.
    fn validate(&self, raw: RawMap) -> Result<TypedObject>;
}
