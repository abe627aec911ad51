//! # Render Errors

use nmech_core::{DocumentError, ModelError};
use thiserror::Error;

/// Rendering, writing or loading a document failed.
#[derive(Error, Debug)]
pub enum RenderError {
    /// JSON serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// XML writing failed.
    #[error("xml error: {0}")]
    Xml(String),

    /// The document could not be converted to an untyped value.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// A document file could not be loaded.
    #[error("{0}")]
    Document(#[from] DocumentError),

    /// Writing an output file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The document identifier cannot name an output file.
    #[error("document id '{0}' cannot be used as a file name")]
    InvalidFileStem(String),
}
