//! # Schema Generation
//!
//! Builds a JSON Schema (Draft 2020-12) from a root record descriptor.
//! The root record is described inline; every record reachable from it is
//! placed once under `$defs/<name>` and referenced with `$ref`.
//!
//! Optional fields also accept `null`, matching checked construction,
//! which treats `null` as absent.

use std::collections::BTreeMap;

use nmech_core::{FieldKind, FieldSpec, RecordSpec};
use serde_json::{json, Map, Value};

/// Draft 2020-12 metaschema URI.
pub const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

/// `$id` prefix of generated schemas.
pub const SCHEMA_URI_PREFIX: &str = "https://www.neuromech.org/schema/";

/// File name of the schema generated for `spec`, e.g. `mujoco.schema.json`.
pub fn schema_name(spec: &RecordSpec) -> String {
    format!("{}.schema.json", spec.name)
}

/// Generate the JSON Schema for documents rooted at `spec`.
pub fn schema_for(spec: &'static RecordSpec) -> Value {
    let mut defs = BTreeMap::new();
    collect_defs(spec, &mut defs);

    let mut schema = Map::new();
    schema.insert("$schema".into(), json!(DRAFT_2020_12));
    schema.insert("$id".into(), json!(format!("{SCHEMA_URI_PREFIX}{}", schema_name(spec))));
    schema.insert("title".into(), json!(spec.name));
    if let Value::Object(body) = record_schema(spec) {
        schema.extend(body);
    }
    if !defs.is_empty() {
        let defs: Map<String, Value> = defs
            .into_values()
            .map(|child| (child.name.to_string(), record_schema(child)))
            .collect();
        schema.insert("$defs".into(), Value::Object(defs));
    }
    Value::Object(schema)
}

/// Every record reachable from `spec` (excluding `spec` itself), by name.
fn collect_defs(spec: &'static RecordSpec, defs: &mut BTreeMap<&'static str, &'static RecordSpec>) {
    for field in spec.fields {
        if let FieldKind::Record(child) | FieldKind::List(child) = field.kind {
            if defs.insert(child.name, child).is_none() {
                collect_defs(child, defs);
            }
        }
    }
}

fn record_schema(spec: &RecordSpec) -> Value {
    let properties: Map<String, Value> = spec
        .fields
        .iter()
        .map(|field| (field.name.to_string(), field_schema(field)))
        .collect();
    let required: Vec<&str> = spec.required_fields().collect();

    let mut schema = Map::new();
    schema.insert("description".into(), json!(spec.description));
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".into(), json!(required));
    }
    schema.insert("additionalProperties".into(), json!(false));
    Value::Object(schema)
}

fn field_schema(field: &FieldSpec) -> Value {
    let nullable = |ty: &str| {
        if field.required {
            json!(ty)
        } else {
            json!([ty, "null"])
        }
    };

    let mut schema = match field.kind {
        FieldKind::Str => json!({ "type": nullable("string") }),
        FieldKind::Float => json!({ "type": nullable("number") }),
        FieldKind::Metadata => json!({ "type": nullable("object") }),
        FieldKind::List(child) => json!({
            "type": nullable("array"),
            "items": { "$ref": def_ref(child) },
        }),
        FieldKind::Record(child) if field.required => json!({ "$ref": def_ref(child) }),
        FieldKind::Record(child) => json!({
            "anyOf": [{ "$ref": def_ref(child) }, { "type": "null" }],
        }),
    };

    if let Value::Object(map) = &mut schema {
        map.insert("description".into(), json!(field.description));
        if let Some(default) = field.default {
            map.insert("default".into(), json!(default));
        }
    }
    schema
}

fn def_ref(spec: &RecordSpec) -> String {
    format!("#/$defs/{}", spec.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    static POINT: RecordSpec = RecordSpec {
        name: "point",
        description: "a point",
        fields: &[
            FieldSpec::required("x", FieldKind::Float, "x"),
            FieldSpec::optional("label", FieldKind::Str, "label").with_default("p"),
        ],
    };

    static SEGMENT: RecordSpec = RecordSpec {
        name: "segment",
        description: "a segment",
        fields: &[
            FieldSpec::required("id", FieldKind::Str, "id"),
            FieldSpec::optional("start", FieldKind::Record(&POINT), "start"),
            FieldSpec::optional("via", FieldKind::List(&POINT), "via points"),
        ],
    };

    #[test]
    fn test_root_header() {
        let schema = schema_for(&SEGMENT);
        assert_eq!(schema["$schema"], DRAFT_2020_12);
        assert_eq!(schema["$id"], "https://www.neuromech.org/schema/segment.schema.json");
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["id"]));
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn test_shared_child_defined_once() {
        let schema = schema_for(&SEGMENT);
        let defs = schema["$defs"].as_object().unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs["point"]["required"], json!(["x"]));
    }

    #[test]
    fn test_field_kinds() {
        let schema = schema_for(&SEGMENT);
        let props = &schema["properties"];
        assert_eq!(props["id"]["type"], "string");
        assert_eq!(props["via"]["type"], json!(["array", "null"]));
        assert_eq!(props["via"]["items"]["$ref"], "#/$defs/point");
        assert_eq!(props["start"]["anyOf"][0]["$ref"], "#/$defs/point");
    }

    #[test]
    fn test_defaults_carried() {
        let schema = schema_for(&SEGMENT);
        assert_eq!(schema["$defs"]["point"]["properties"]["label"]["default"], "p");
    }

    #[test]
    fn test_leaf_root_has_no_defs() {
        let schema = schema_for(&POINT);
        assert!(schema.get("$defs").is_none());
        assert_eq!(schema_name(&POINT), "point.schema.json");
    }
}
