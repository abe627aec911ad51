//! # Document Files
//!
//! Renders documents into files named after the document identifier
//! (`<id>.json`, `<id>.xml`, `<id>.yaml`) and loads JSON/YAML documents
//! back through checked construction.

use std::path::{Path, PathBuf};

use nmech_core::{Document, Format, Record};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::text::{to_json, to_yaml};
use crate::xml::to_xml;

/// Layout options for rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Spaces per indentation level in JSON and XML output.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Render a document in one format.
///
/// # Errors
///
/// Propagates the serializer's error for the chosen format.
pub fn render<R: Record>(doc: &R, format: Format, options: &RenderOptions) -> Result<String, RenderError> {
    match format {
        Format::Json => to_json(doc, options.indent),
        Format::Xml => to_xml(doc, options.indent),
        Format::Yaml => to_yaml(doc),
    }
}

/// Path of the file `doc` is written to in `format` under `dir`.
///
/// # Errors
///
/// Returns [`RenderError::InvalidFileStem`] if the identifier is empty,
/// `.`/`..`, or contains a path separator.
pub fn output_path<D: Document>(doc: &D, dir: &Path, format: Format) -> Result<PathBuf, RenderError> {
    let id = doc.id();
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
        return Err(RenderError::InvalidFileStem(id.to_string()));
    }
    Ok(dir.join(format!("{id}.{}", format.extension())))
}

/// Write `doc` to `dir` once per format, creating `dir` if needed.
///
/// Every format is rendered before any file is written, so a rendering
/// failure leaves no files behind. Returns the written paths in the order
/// of `formats`.
///
/// # Errors
///
/// Returns the first rendering error, or [`RenderError::Io`] if a file
/// cannot be written.
pub fn write_document<D: Document>(
    doc: &D,
    dir: &Path,
    formats: &[Format],
    options: &RenderOptions,
) -> Result<Vec<PathBuf>, RenderError> {
    let mut rendered = Vec::with_capacity(formats.len());
    for &format in formats {
        let path = output_path(doc, dir, format)?;
        rendered.push((path, render(doc, format, options)?));
    }

    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(rendered.len());
    for (path, text) in rendered {
        std::fs::write(&path, text)?;
        tracing::info!(path = %path.display(), id = doc.id(), "wrote document");
        written.push(path);
    }
    Ok(written)
}

/// Load a `.json`, `.yaml` or `.yml` document and construct it with
/// descriptor checks.
///
/// # Errors
///
/// Returns [`RenderError::Document`] for unreadable, unparsable or
/// invalid documents.
pub fn load_document<R: Record>(path: &Path) -> Result<R, RenderError> {
    tracing::debug!(path = %path.display(), "loading document");
    let doc = nmech_core::read_record(path)?;
    Ok(doc)
}
