//! Built-in schema adapter with declarative field definitions.
//!
//! [`ObjectSchema`] implements the [`Schema`] capability over a plain list
//! of [`FieldDef`]s, so conversions work out of the box without an external
//! validation library. All definition types derive serde traits, so a schema
//! can be loaded from JSON or YAML configuration:
//!
//! ```rust
//! use mdform_core::{FieldDef, FieldType, ObjectSchema, Schema};
//!
//! let schema = ObjectSchema::new(vec![
//!     FieldDef::new("name", FieldType::Text),
//!     FieldDef::new("age", FieldType::Optional(Box::new(FieldType::Integer))),
//!     FieldDef::new("tags", FieldType::Array(Box::new(FieldType::Text))),
//! ]);
//!
//! assert_eq!(schema.field_names(), vec!["name", "age", "tags"]);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FieldIssue, Result, ValidationError};
use crate::schema::{FieldShape, Schema};
use crate::value::{RawMap, RawValue, TypedObject};

/// Declared type of a field.
///
/// Scalar types coerce a single accumulated string; `Array` coerces each
/// accumulated item by its element type. `Optional` and `WithDefault` wrap
/// an inner type and change only the missing-value behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free text, passed through as-is.
    Text,
    /// A signed 64-bit integer.
    Integer,
    /// A 64-bit float.
    Float,
    /// `true` or `false`, case-insensitive.
    Boolean,
    /// One value out of a declared set, matched exactly.
    Choice(Vec<String>),
    /// An ordered list of scalar values.
    Array(Box<FieldType>),
    /// Missing values are allowed; the key is absent from the output.
    Optional(Box<FieldType>),
    /// Missing values are replaced with a default.
    WithDefault {
        /// The wrapped type used when a value is present.
        inner: Box<FieldType>,
        /// The value inserted when the field is missing.
        default: Value,
    },
}

impl FieldType {
    /// The effective type after unwrapping exactly one wrapper level.
    ///
    /// A doubly wrapped type (e.g. optional-of-default-of-array) is
    /// classified by its once-unwrapped type and may therefore report as
    /// scalar. Known limitation, kept deliberately.
    fn effective(&self) -> &FieldType {
        match self {
            Self::Optional(inner) => inner,
            Self::WithDefault { inner, .. } => inner,
            other => other,
        }
    }

    /// Shape of the effective type.
    pub fn shape(&self) -> FieldShape {
        if matches!(self.effective(), Self::Array(_)) {
            FieldShape::Array
        } else {
            FieldShape::Scalar
        }
    }
}

/// String transform applied to raw input before coercion.
///
/// Transforms are idempotent, so values that already satisfy them survive
/// repeated serialize/extract round trips unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Case-fold to lowercase.
    Lowercase,
    /// Case-fold to uppercase.
    Uppercase,
    /// Trim surrounding whitespace.
    Trim,
}

impl Transform {
    fn apply(self, input: &str) -> String {
        match self {
            Self::Lowercase => input.to_lowercase(),
            Self::Uppercase => input.to_uppercase(),
            Self::Trim => input.trim().to_string(),
        }
    }
}

/// A single declared field: name, type, and optional input transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Declared field name, used verbatim as the output object key.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: FieldType,
    /// Transform applied to raw strings before coercion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
}

impl FieldDef {
    /// Declare a field with no transform.
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            transform: None,
        }
    }

    /// Attach an input transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    fn prepare(&self, input: &str) -> String {
        match self.transform {
            Some(t) => t.apply(input),
            None => input.to_string(),
        }
    }
}

/// Declarative object schema: an ordered list of field definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSchema {
    fields: Vec<FieldDef>,
}

impl ObjectSchema {
    /// Build a schema from field definitions in declaration order.
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields }
    }

    /// The declared field definitions.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    fn find(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl Schema for ObjectSchema {
    fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    fn field_shape(&self, name: &str) -> Option<FieldShape> {
        self.find(name).map(|f| f.ty.shape())
    }

    fn validate(&self, mut raw: RawMap) -> Result<TypedObject> {
        let mut object = TypedObject::new();
        let mut issues = Vec::new();

        for def in &self.fields {
            match coerce_field(def, &def.ty, raw.remove(&def.name)) {
                Ok(Some(value)) => {
                    object.insert(def.name.clone(), value);
                }
                Ok(None) => {}
                Err(message) => issues.push(FieldIssue::new(&def.name, message)),
            }
        }

        if issues.is_empty() {
            Ok(object)
        } else {
            log::debug!("validation rejected {} field(s)", issues.len());
            Err(ValidationError::new(issues))
        }
    }
}

/// Coerce one field's raw accumulation according to its declared type.
///
/// Returns `Ok(None)` when an optional field is absent (the key is omitted
/// from the output object).
fn coerce_field(
    def: &FieldDef,
    ty: &FieldType,
    raw: Option<RawValue>,
) -> std::result::Result<Option<Value>, String> {
    match ty {
        FieldType::Optional(inner) => match raw {
            None => Ok(None),
            some => coerce_field(def, inner, some),
        },
        FieldType::WithDefault { inner, default } => match raw {
            None => Ok(Some(default.clone())),
            some => coerce_field(def, inner, some),
        },
        FieldType::Array(elem) => {
            let items = match raw {
                None => return Err("required field is missing".to_string()),
                // A lone text accumulation for an array field is treated as
                // a single-element list.
                Some(RawValue::Text(text)) => vec![text],
                Some(RawValue::Items(items)) => items,
            };
            let values = items
                .iter()
                .map(|item| coerce_scalar(elem, &def.prepare(item)))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(Some(Value::Array(values)))
        }
        scalar => {
            let text = match raw {
                None => return Err("required field is missing".to_string()),
                Some(RawValue::Text(text)) => text,
                Some(RawValue::Items(items)) => items.join("\n"),
            };
            coerce_scalar(scalar, &def.prepare(&text)).map(Some)
        }
    }
}

/// Coerce a single string into a scalar JSON value.
fn coerce_scalar(ty: &FieldType, input: &str) -> std::result::Result<Value, String> {
    match ty {
        FieldType::Text => Ok(Value::String(input.to_string())),
        FieldType::Integer => input
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .map_err(|_| format!("expected an integer, got {input:?}")),
        FieldType::Float => {
            let parsed = input
                .parse::<f64>()
                .map_err(|_| format!("expected a number, got {input:?}"))?;
            serde_json::Number::from_f64(parsed)
                .map(Value::Number)
                .ok_or_else(|| format!("number is not finite: {input:?}"))
        }
        FieldType::Boolean => {
            if input.eq_ignore_ascii_case("true") {
                Ok(Value::Bool(true))
            } else if input.eq_ignore_ascii_case("false") {
                Ok(Value::Bool(false))
            } else {
                Err(format!("expected true or false, got {input:?}"))
            }
        }
        FieldType::Choice(variants) => {
            if variants.iter().any(|v| v == input) {
                Ok(Value::String(input.to_string()))
            } else {
                Err(format!(
                    "{input:?} is not one of [{}]",
                    variants.join(", ")
                ))
            }
        }
        FieldType::Optional(inner) | FieldType::WithDefault { inner, .. } => {
            coerce_scalar(inner, input)
        }
        FieldType::Array(_) => Err("nested arrays are not supported".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_text(field: &str, text: &str) -> RawMap {
        let mut raw = RawMap::new();
        raw.insert(field.to_string(), RawValue::Text(text.to_string()));
        raw
    }

    // -------------------------------------------------------------------------
    // Shape classification
    // -------------------------------------------------------------------------

    #[test]
    fn test_shape_scalar() {
        assert_eq!(FieldType::Text.shape(), FieldShape::Scalar);
        assert_eq!(FieldType::Integer.shape(), FieldShape::Scalar);
    }

    #[test]
    fn test_shape_array() {
        let ty = FieldType::Array(Box::new(FieldType::Text));
        assert_eq!(ty.shape(), FieldShape::Array);
    }

    #[test]
    fn test_shape_optional_array_unwraps_one_level() {
        let ty = FieldType::Optional(Box::new(FieldType::Array(Box::new(FieldType::Text))));
        assert_eq!(ty.shape(), FieldShape::Array);
    }

    #[test]
    fn test_shape_double_wrapped_array_reports_scalar() {
        // Known one-level-unwrap limitation: optional-of-optional-of-array
        // classifies by the once-unwrapped type.
        let ty = FieldType::Optional(Box::new(FieldType::Optional(Box::new(
            FieldType::Array(Box::new(FieldType::Text)),
        ))));
        assert_eq!(ty.shape(), FieldShape::Scalar);
    }

    #[test]
    fn test_shape_undeclared_field_is_unknown() {
        let schema = ObjectSchema::new(vec![FieldDef::new("name", FieldType::Text)]);
        assert_eq!(schema.field_shape("name"), Some(FieldShape::Scalar));
        assert_eq!(schema.field_shape("missing"), None);
    }

    // -------------------------------------------------------------------------
    // Coercion
    // -------------------------------------------------------------------------

    #[test]
    fn test_coerce_text_passthrough() {
        let schema = ObjectSchema::new(vec![FieldDef::new("name", FieldType::Text)]);
        let object = schema.validate(raw_text("name", "Ada")).unwrap();
        assert_eq!(object["name"], json!("Ada"));
    }

    #[test]
    fn test_coerce_integer() {
        let schema = ObjectSchema::new(vec![FieldDef::new("age", FieldType::Integer)]);
        let object = schema.validate(raw_text("age", "42")).unwrap();
        assert_eq!(object["age"], json!(42));
    }

    #[test]
    fn test_coerce_integer_zero() {
        let schema = ObjectSchema::new(vec![FieldDef::new("count", FieldType::Integer)]);
        let object = schema.validate(raw_text("count", "0")).unwrap();
        assert_eq!(object["count"], json!(0));
    }

    #[test]
    fn test_coerce_integer_rejects_garbage() {
        let schema = ObjectSchema::new(vec![FieldDef::new("age", FieldType::Integer)]);
        let err = schema.validate(raw_text("age", "forty-two")).unwrap_err();
        assert_eq!(err.failed_fields(), vec!["age"]);
    }

    #[test]
    fn test_coerce_float() {
        let schema = ObjectSchema::new(vec![FieldDef::new("score", FieldType::Float)]);
        let object = schema.validate(raw_text("score", "3.25")).unwrap();
        assert_eq!(object["score"], json!(3.25));
    }

    #[test]
    fn test_coerce_boolean_case_insensitive() {
        let schema = ObjectSchema::new(vec![FieldDef::new("done", FieldType::Boolean)]);
        let object = schema.validate(raw_text("done", "FALSE")).unwrap();
        assert_eq!(object["done"], json!(false));
    }

    #[test]
    fn test_coerce_choice_accepts_declared_variant() {
        let ty = FieldType::Choice(vec!["red".to_string(), "blue".to_string()]);
        let schema = ObjectSchema::new(vec![FieldDef::new("color", ty)]);
        let object = schema.validate(raw_text("color", "blue")).unwrap();
        assert_eq!(object["color"], json!("blue"));
    }

    #[test]
    fn test_coerce_choice_rejects_unknown_variant() {
        let ty = FieldType::Choice(vec!["red".to_string(), "blue".to_string()]);
        let schema = ObjectSchema::new(vec![FieldDef::new("color", ty)]);
        let err = schema.validate(raw_text("color", "green")).unwrap_err();
        assert!(err.to_string().contains("green"));
    }

    #[test]
    fn test_coerce_array_elements() {
        let ty = FieldType::Array(Box::new(FieldType::Integer));
        let schema = ObjectSchema::new(vec![FieldDef::new("nums", ty)]);
        let mut raw = RawMap::new();
        raw.insert(
            "nums".to_string(),
            RawValue::Items(vec!["1".to_string(), "2".to_string()]),
        );
        let object = schema.validate(raw).unwrap();
        assert_eq!(object["nums"], json!([1, 2]));
    }

    #[test]
    fn test_coerce_text_into_array_field_wraps() {
        let ty = FieldType::Array(Box::new(FieldType::Text));
        let schema = ObjectSchema::new(vec![FieldDef::new("tags", ty)]);
        let object = schema.validate(raw_text("tags", "solo")).unwrap();
        assert_eq!(object["tags"], json!(["solo"]));
    }

    // -------------------------------------------------------------------------
    // Missing values, optionals, defaults
    // -------------------------------------------------------------------------

    #[test]
    fn test_missing_required_field_fails() {
        let schema = ObjectSchema::new(vec![FieldDef::new("name", FieldType::Text)]);
        let err = schema.validate(RawMap::new()).unwrap_err();
        assert_eq!(err.failed_fields(), vec!["name"]);
    }

    #[test]
    fn test_missing_optional_field_is_absent() {
        let ty = FieldType::Optional(Box::new(FieldType::Text));
        let schema = ObjectSchema::new(vec![FieldDef::new("nickname", ty)]);
        let object = schema.validate(RawMap::new()).unwrap();
        assert!(!object.contains_key("nickname"));
    }

    #[test]
    fn test_missing_field_with_default_gets_default() {
        let ty = FieldType::WithDefault {
            inner: Box::new(FieldType::Integer),
            default: json!(7),
        };
        let schema = ObjectSchema::new(vec![FieldDef::new("retries", ty)]);
        let object = schema.validate(RawMap::new()).unwrap();
        assert_eq!(object["retries"], json!(7));
    }

    #[test]
    fn test_all_failures_collected() {
        let schema = ObjectSchema::new(vec![
            FieldDef::new("a", FieldType::Integer),
            FieldDef::new("b", FieldType::Boolean),
        ]);
        let mut raw = RawMap::new();
        raw.insert("a".to_string(), RawValue::Text("x".to_string()));
        let err = schema.validate(raw).unwrap_err();
        assert_eq!(err.failed_fields(), vec!["a", "b"]);
    }

    // -------------------------------------------------------------------------
    // Transforms
    // -------------------------------------------------------------------------

    #[test]
    fn test_lowercase_transform_applies_before_coercion() {
        let ty = FieldType::Choice(vec!["red".to_string()]);
        let schema = ObjectSchema::new(vec![
            FieldDef::new("color", ty).with_transform(Transform::Lowercase),
        ]);
        let object = schema.validate(raw_text("color", "RED")).unwrap();
        assert_eq!(object["color"], json!("red"));
    }

    #[test]
    fn test_transform_applies_to_array_elements() {
        let ty = FieldType::Array(Box::new(FieldType::Text));
        let schema = ObjectSchema::new(vec![
            FieldDef::new("tags", ty).with_transform(Transform::Uppercase),
        ]);
        let mut raw = RawMap::new();
        raw.insert(
            "tags".to_string(),
            RawValue::Items(vec!["one".to_string(), "two".to_string()]),
        );
        let object = schema.validate(raw).unwrap();
        assert_eq!(object["tags"], json!(["ONE", "TWO"]));
    }

    // -------------------------------------------------------------------------
    // Serde round trip of the schema definition itself
    // -------------------------------------------------------------------------

    #[test]
    fn test_schema_deserializes_from_json() {
        let schema: ObjectSchema = serde_json::from_value(json!({
            "fields": [
                { "name": "title", "type": "text" },
                { "name": "tags", "type": { "array": "text" } },
            ]
        }))
        .unwrap();
        assert_eq!(schema.field_names(), vec!["title", "tags"]);
        assert_eq!(schema.field_shape("tags"), Some(FieldShape::Array));
    }
}
