//! # JSON and YAML Rendering

use serde::ser::Error as _;
use serde::Serialize;

use crate::error::RenderError;

/// Render as pretty-printed JSON indented by `indent` spaces.
///
/// # Errors
///
/// Returns [`RenderError::Json`] if serialization fails or produces
/// invalid UTF-8.
pub fn to_json<T: Serialize>(doc: &T, indent: usize) -> Result<String, RenderError> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| RenderError::Json(serde_json::Error::custom(e)))
}

/// Render as YAML.
///
/// # Errors
///
/// Returns [`RenderError::Yaml`] if serialization fails.
pub fn to_yaml<T: Serialize>(doc: &T) -> Result<String, RenderError> {
    Ok(serde_yaml::to_string(doc)?)
}
