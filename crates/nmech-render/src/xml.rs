//! # XML Rendering
//!
//! Writes a record tree as XML, driven by the record descriptors:
//!
//! - string and number fields become attributes, named by the field's
//!   XML name (`xmlns_xsi` is written as `xmlns:xsi`);
//! - a single owned record becomes a child element named after the field;
//! - each item of an owned sequence becomes a child element named after
//!   the item's record (`<body>`, `<geom>`, ...);
//! - metadata becomes a `<metadata>` child with one attribute per key;
//!   keys that are not XML attribute names are rejected.
//!
//! Elements without children are self-closed.

use std::io::Write;

use nmech_core::{FieldKind, Record, RecordSpec};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use serde_json::Value;

use crate::error::RenderError;

/// Render a record tree as an XML document indented by `indent` spaces.
///
/// # Errors
///
/// Returns [`RenderError::Model`] if the record cannot be converted to a
/// value and [`RenderError::Xml`] if writing fails.
pub fn to_xml<R: Record>(doc: &R, indent: usize) -> Result<String, RenderError> {
    let value = doc.to_value()?;
    let spec = R::spec();

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', indent);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| RenderError::Xml(format!("failed to write XML declaration: {e}")))?;
    write_record(&mut writer, spec, spec.name, &value)?;

    let mut buffer = writer.into_inner();
    buffer.push(b'\n');
    String::from_utf8(buffer)
        .map_err(|e| RenderError::Xml(format!("invalid UTF-8 in generated XML: {e}")))
}

fn write_record<W: Write>(
    writer: &mut Writer<W>,
    spec: &RecordSpec,
    tag: &str,
    value: &Value,
) -> Result<(), RenderError> {
    let map = value
        .as_object()
        .ok_or_else(|| RenderError::Xml(format!("<{tag}> is not a mapping")))?;

    let mut start = BytesStart::new(tag);
    for field in spec.fields {
        if let FieldKind::Str | FieldKind::Float = field.kind {
            if let Some(v) = map.get(field.name).filter(|v| !v.is_null()) {
                start.push_attribute((field.xml_name, attribute_text(v).as_str()));
            }
        }
    }

    let has_children = spec.fields.iter().any(|field| {
        matches!(
            field.kind,
            FieldKind::Metadata | FieldKind::Record(_) | FieldKind::List(_)
        ) && map.get(field.name).is_some_and(|v| !is_empty(v))
    });

    if !has_children {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| RenderError::Xml(format!("failed to write <{tag}>: {e}")));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| RenderError::Xml(format!("failed to write <{tag}>: {e}")))?;

    for field in spec.fields {
        let Some(v) = map.get(field.name).filter(|v| !is_empty(v)) else {
            continue;
        };
        match field.kind {
            FieldKind::Metadata => write_metadata(writer, v)?,
            FieldKind::Record(child) => write_record(writer, child, field.name, v)?,
            FieldKind::List(child) => {
                for item in v.as_array().into_iter().flatten() {
                    write_record(writer, child, child.name, item)?;
                }
            }
            FieldKind::Str | FieldKind::Float => {}
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(|e| RenderError::Xml(format!("failed to close <{tag}>: {e}")))?;
    Ok(())
}

fn write_metadata<W: Write>(writer: &mut Writer<W>, value: &Value) -> Result<(), RenderError> {
    let mut element = BytesStart::new("metadata");
    for (key, v) in value.as_object().into_iter().flatten() {
        if !is_attribute_name(key) {
            return Err(RenderError::Xml(format!(
                "metadata key {key:?} is not a valid XML attribute name"
            )));
        }
        element.push_attribute((key.as_str(), attribute_text(v).as_str()));
    }
    writer
        .write_event(Event::Empty(element))
        .map_err(|e| RenderError::Xml(format!("failed to write <metadata>: {e}")))
}

/// Strings verbatim; everything else as compact JSON.
fn attribute_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// XML `Name` without namespace prefixes: a letter or `_`, then letters,
/// digits, `_`, `-` or `.`.
fn is_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
