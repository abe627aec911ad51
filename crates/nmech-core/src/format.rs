//! # Document Formats
//!
//! The file formats a document can be rendered to, and reading JSON/YAML
//! document files back into untyped values. XML is write-only.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DocumentError;
use crate::record::Record;

/// Output format of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Pretty-printed JSON.
    Json,
    /// XML with one element per record.
    Xml,
    /// YAML.
    Yaml,
}

impl Format {
    /// Every format, in the order files are written.
    pub const ALL: [Format; 3] = [Format::Json, Format::Xml, Format::Yaml];

    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Yaml => "yaml",
        }
    }

    /// Infer the format from a path's extension (`.yml` is YAML).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|e| e.to_str())?.parse().ok()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Unrecognized format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format '{0}' (expected json, xml or yaml)")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Parse document text in the given format into an untyped value.
///
/// # Errors
///
/// Returns [`DocumentError::UnsupportedFormat`] for XML and
/// [`DocumentError::Parse`] for malformed input.
pub fn parse_value(content: &str, format: Format, origin: &str) -> Result<Value, DocumentError> {
    let parse_err = |reason: String| DocumentError::Parse {
        path: origin.to_string(),
        reason,
    };
    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string())),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string())),
        Format::Xml => Err(DocumentError::UnsupportedFormat {
            path: origin.to_string(),
        }),
    }
}

/// Read a `.json`, `.yaml` or `.yml` file into an untyped value.
///
/// # Errors
///
/// Returns [`DocumentError::UnsupportedFormat`] when the extension is not
/// readable, [`DocumentError::Io`] or [`DocumentError::Parse`] otherwise.
pub fn read_value(path: &Path) -> Result<Value, DocumentError> {
    let origin = path.display().to_string();
    let format = Format::from_path(path)
        .ok_or_else(|| DocumentError::UnsupportedFormat { path: origin.clone() })?;
    if format == Format::Xml {
        return Err(DocumentError::UnsupportedFormat { path: origin });
    }
    let content = std::fs::read_to_string(path)?;
    parse_value(&content, format, &origin)
}

/// Read a document file and construct the typed record.
///
/// # Errors
///
/// See [`read_value`]; construction failures surface as
/// [`DocumentError::Model`].
pub fn read_record<R: Record>(path: &Path) -> Result<R, DocumentError> {
    let value = read_value(path)?;
    Ok(R::from_value(&value)?)
}
