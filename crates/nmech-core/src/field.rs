//! # Record Descriptors
//!
//! Static descriptions of every record type: which fields it declares,
//! which are required, and what kind of value each holds. Descriptors are
//! the single source for untyped-construction checks, XML element naming
//! and JSON Schema generation.
//!
//! Descriptors are `static` items so that `Record` and `List` fields can
//! point at the descriptor of the child record.

use serde::ser::{Error as _, Serializer};
use serde_json::{Map, Value};

use crate::error::ModelError;

/// Kind of value a field holds.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A string. Mujoco vectors are carried as space-separated strings.
    Str,
    /// A floating-point number.
    Float,
    /// Free-form string-keyed mapping of arbitrary values.
    Metadata,
    /// A single owned child record.
    Record(&'static RecordSpec),
    /// An ordered sequence of owned child records.
    List(&'static RecordSpec),
}

impl FieldKind {
    /// Name of the expected value kind, as reported in errors.
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Float => "number",
            Self::Metadata => "mapping",
            Self::Record(_) => "record",
            Self::List(_) => "sequence",
        }
    }
}

/// One declared field of a record.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name on the wire (JSON/YAML key).
    pub name: &'static str,
    /// Attribute name used when the field is rendered as XML.
    pub xml_name: &'static str,
    /// Value kind.
    pub kind: FieldKind,
    /// Whether construction fails when the field is absent.
    pub required: bool,
    /// Default text for string fields that carry one.
    pub default: Option<&'static str>,
    /// Short description.
    pub description: &'static str,
}

impl FieldSpec {
    /// A required field.
    pub const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            xml_name: name,
            kind,
            required: true,
            default: None,
            description,
        }
    }

    /// An optional field, absent or empty by default.
    pub const fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            xml_name: name,
            kind,
            required: false,
            default: None,
            description,
        }
    }

    /// The optional `metadata` field carried by annotated records.
    pub const fn metadata() -> Self {
        Self::optional(
            "metadata",
            FieldKind::Metadata,
            "Arbitrary mapping of string keys to JSON-serializable values.",
        )
    }

    /// Sets the default text of an optional string field.
    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Renames the field when rendered as an XML attribute.
    pub const fn with_xml_name(mut self, xml_name: &'static str) -> Self {
        self.xml_name = xml_name;
        self
    }
}

/// Descriptor of a record type.
#[derive(Debug)]
pub struct RecordSpec {
    /// Element name, e.g. `geom`.
    pub name: &'static str,
    /// Short description of the record.
    pub description: &'static str,
    /// Declared fields, in declaration order.
    pub fields: &'static [FieldSpec],
}

impl RecordSpec {
    /// Look up a declared field by wire name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }

    /// Check that `value` describes a valid instance of this record.
    ///
    /// Checks recurse into owned records and sequences. The first failure
    /// is returned; nothing is constructed, so callers never observe a
    /// partially built record.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingField`], [`ModelError::TypeMismatch`] or
    /// [`ModelError::UnknownField`].
    pub fn check(&self, value: &Value) -> Result<(), ModelError> {
        self.check_at(value, "")
    }

    fn check_at(&self, value: &Value, path: &str) -> Result<(), ModelError> {
        let Some(map) = value.as_object() else {
            return Err(ModelError::TypeMismatch {
                record: self.name,
                field: if path.is_empty() { "(root)".to_string() } else { path.to_string() },
                expected: "record",
                found: kind_of(value),
            });
        };

        if let Some(key) = map.keys().find(|k| self.field(k).is_none()) {
            return Err(ModelError::UnknownField {
                record: self.name,
                field: join(path, key),
            });
        }

        for field in self.fields {
            self.check_field(field, map, path)?;
        }
        Ok(())
    }

    fn check_field(
        &self,
        field: &FieldSpec,
        map: &Map<String, Value>,
        path: &str,
    ) -> Result<(), ModelError> {
        let field_path = join(path, field.name);
        let value = match map.get(field.name) {
            None | Some(Value::Null) if field.required => {
                return Err(ModelError::MissingField {
                    record: self.name,
                    field: field_path,
                });
            }
            None | Some(Value::Null) => return Ok(()),
            Some(value) => value,
        };

        let mismatch = || ModelError::TypeMismatch {
            record: self.name,
            field: field_path.clone(),
            expected: field.kind.expected(),
            found: kind_of(value),
        };

        match field.kind {
            FieldKind::Str if value.is_string() => Ok(()),
            FieldKind::Float if value.is_number() => Ok(()),
            FieldKind::Metadata if value.is_object() => Ok(()),
            FieldKind::Record(child) if value.is_object() => child.check_at(value, &field_path),
            FieldKind::List(child) => {
                let items = value.as_array().ok_or_else(mismatch)?;
                for (i, item) in items.iter().enumerate() {
                    child.check_at(item, &format!("{field_path}[{i}]"))?;
                }
                Ok(())
            }
            _ => Err(mismatch()),
        }
    }

    /// Remove `null` entries of declared fields, recursing into owned
    /// records and sequences. Metadata contents are left untouched.
    ///
    /// Run after [`RecordSpec::check`] so that decoding sees absent fields
    /// where the input wrote `null`.
    pub fn drop_nulls(&self, value: &mut Value) {
        let Some(map) = value.as_object_mut() else {
            return;
        };
        map.retain(|_, v| !v.is_null());
        for field in self.fields {
            match (field.kind, map.get_mut(field.name)) {
                (FieldKind::Record(child), Some(v)) => child.drop_nulls(v),
                (FieldKind::List(child), Some(Value::Array(items))) => {
                    for item in items {
                        child.drop_nulls(item);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Serialize an `f64` field, refusing NaN and infinities.
///
/// JSON has no representation for non-finite numbers; `serde_json` would
/// silently write `null` and the document would no longer load.
///
/// # Errors
///
/// Returns the serializer's custom error for a non-finite value.
pub fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(S::Error::custom(format!("non-finite number {value} cannot be serialized")));
    }
    serializer.serialize_f64(*value)
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

/// Kind of a JSON value, as reported in errors.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static LEAF: RecordSpec = RecordSpec {
        name: "leaf",
        description: "test leaf",
        fields: &[
            FieldSpec::required("type", FieldKind::Str, "leaf type"),
            FieldSpec::optional("size", FieldKind::Str, "leaf size"),
            FieldSpec::optional("weight", FieldKind::Float, "leaf weight"),
        ],
    };

    static TREE: RecordSpec = RecordSpec {
        name: "tree",
        description: "test tree",
        fields: &[
            FieldSpec::required("id", FieldKind::Str, "tree id"),
            FieldSpec::optional("root", FieldKind::Record(&LEAF), "single leaf"),
            FieldSpec::optional("leaves", FieldKind::List(&LEAF), "owned leaves"),
            FieldSpec::optional("metadata", FieldKind::Metadata, "annotations"),
        ],
    };

    #[test]
    fn test_valid_value_passes() {
        let value = json!({
            "id": "t",
            "root": {"type": "a", "weight": 1.5},
            "leaves": [{"type": "b"}, {"type": "c", "size": "1 2"}],
            "metadata": {"note": 3}
        });
        TREE.check(&value).unwrap();
    }

    #[test]
    fn test_missing_required_field() {
        let err = TREE.check(&json!({"leaves": []})).unwrap_err();
        assert_eq!(
            err,
            ModelError::MissingField {
                record: "tree",
                field: "id".to_string()
            }
        );
    }

    #[test]
    fn test_null_required_field_is_missing() {
        let err = LEAF.check(&json!({"type": null})).unwrap_err();
        assert!(matches!(err, ModelError::MissingField { .. }));
    }

    #[test]
    fn test_null_optional_field_is_absent() {
        LEAF.check(&json!({"type": "x", "size": null})).unwrap();
    }

    #[test]
    fn test_type_mismatch_reports_kinds() {
        let err = LEAF.check(&json!({"type": 7})).unwrap_err();
        assert_eq!(
            err,
            ModelError::TypeMismatch {
                record: "leaf",
                field: "type".to_string(),
                expected: "string",
                found: "number",
            }
        );
    }

    #[test]
    fn test_float_accepts_integer_literal() {
        LEAF.check(&json!({"type": "x", "weight": 10})).unwrap();
    }

    #[test]
    fn test_nested_error_path() {
        let value = json!({
            "id": "t",
            "leaves": [{"type": "ok"}, {"size": "1"}]
        });
        let err = TREE.check(&value).unwrap_err();
        assert_eq!(err.field(), Some("leaves[1].type"));
        assert!(matches!(err, ModelError::MissingField { record: "leaf", .. }));
    }

    #[test]
    fn test_list_must_be_sequence() {
        let err = TREE.check(&json!({"id": "t", "leaves": {"type": "a"}})).unwrap_err();
        assert!(matches!(
            err,
            ModelError::TypeMismatch { expected: "sequence", found: "mapping", .. }
        ));
    }

    #[test]
    fn test_record_must_be_mapping() {
        let err = TREE.check(&json!({"id": "t", "root": "leaf"})).unwrap_err();
        assert!(matches!(err, ModelError::TypeMismatch { expected: "record", .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = LEAF.check(&json!({"type": "x", "colour": "red"})).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownField {
                record: "leaf",
                field: "colour".to_string()
            }
        );
    }

    #[test]
    fn test_non_mapping_root() {
        let err = LEAF.check(&json!(["type"])).unwrap_err();
        assert_eq!(err.field(), Some("(root)"));
    }

    #[test]
    fn test_drop_nulls_recurses_but_keeps_metadata() {
        let mut value = json!({
            "id": "t",
            "root": {"type": "a", "size": null},
            "leaves": [{"type": "b", "weight": null}],
            "metadata": {"note": null}
        });
        TREE.check(&value).unwrap();
        TREE.drop_nulls(&mut value);
        assert_eq!(
            value,
            json!({
                "id": "t",
                "root": {"type": "a"},
                "leaves": [{"type": "b"}],
                "metadata": {"note": null}
            })
        );
    }

    #[test]
    fn test_drop_nulls_removes_null_sequence() {
        let mut value = json!({"id": "t", "leaves": null, "metadata": null});
        TREE.drop_nulls(&mut value);
        assert_eq!(value, json!({"id": "t"}));
    }

    #[test]
    fn test_serialize_finite_rejects_nan() {
        #[derive(serde::Serialize)]
        struct Weight {
            #[serde(serialize_with = "serialize_finite")]
            w: f64,
        }
        assert_eq!(serde_json::to_value(Weight { w: 1.5 }).unwrap(), json!({"w": 1.5}));
        let err = serde_json::to_value(Weight { w: f64::NAN }).unwrap_err();
        assert!(err.to_string().contains("non-finite"), "{err}");
        assert!(serde_json::to_value(Weight { w: f64::INFINITY }).is_err());
    }

    #[test]
    fn test_required_fields_in_order() {
        let required: Vec<&str> = TREE.required_fields().collect();
        assert_eq!(required, vec!["id"]);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn string_leaves_always_pass(kind in "[a-z]{1,8}", size in proptest::option::of("[0-9 ]{0,12}")) {
                let mut value = json!({"type": kind});
                if let Some(size) = size {
                    value["size"] = json!(size);
                }
                prop_assert!(LEAF.check(&value).is_ok());
            }

            #[test]
            fn numeric_type_is_always_a_mismatch(n in any::<i64>()) {
                let err = LEAF.check(&json!({"type": n})).unwrap_err();
                prop_assert_eq!(err.field(), Some("type"));
                let is_mismatch = matches!(err, ModelError::TypeMismatch { found: "number", .. });
                prop_assert!(is_mismatch);
            }

            #[test]
            fn undeclared_keys_are_reported(key in "[A-Z][a-z]{0,6}") {
                let err = LEAF.check(&json!({"type": "x", (key.clone()): 1})).unwrap_err();
                prop_assert_eq!(err, ModelError::UnknownField { record: "leaf", field: key });
            }
        }
    }
}
