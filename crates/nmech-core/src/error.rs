//! # Error Types
//!
//! Construction and document-loading errors shared by every model crate.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - A missing required field, a mistyped value and an undeclared key are
//!   three distinct variants so callers can tell them apart without
//!   parsing messages.
//! - Every variant names the record and the dotted field path relative to
//!   the value handed to construction.

use thiserror::Error;

/// Construction of a record from an untyped value failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A required field was absent or `null`.
    #[error("{record}: missing required field '{field}'")]
    MissingField {
        /// Element name of the record that declares the field.
        record: &'static str,
        /// Dotted path to the field.
        field: String,
    },

    /// A value did not match the kind declared for its field.
    #[error("{record}: field '{field}' expected {expected}, found {found}")]
    TypeMismatch {
        /// Element name of the record that declares the field.
        record: &'static str,
        /// Dotted path to the field, or the record path itself when the
        /// record value is not a mapping.
        field: String,
        /// Declared kind, e.g. `string`.
        expected: &'static str,
        /// Kind of the value actually supplied.
        found: &'static str,
    },

    /// The value carried a key the record does not declare.
    #[error("{record}: unknown field '{field}'")]
    UnknownField {
        /// Element name of the record being constructed.
        record: &'static str,
        /// Dotted path to the undeclared key.
        field: String,
    },

    /// The value passed descriptor checks but could not be decoded into
    /// the typed record.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ModelError {
    /// Dotted path of the offending field, if the error names one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field, .. }
            | Self::TypeMismatch { field, .. }
            | Self::UnknownField { field, .. } => Some(field),
            Self::Serialization(_) => None,
        }
    }
}

/// Reading a document file failed.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file content is not valid for its format.
    #[error("cannot parse '{path}': {reason}")]
    Parse {
        /// Path to the document.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The file extension does not name a readable format.
    #[error("unsupported document format for '{path}'")]
    UnsupportedFormat {
        /// Path to the document.
        path: String,
    },

    /// The parsed value does not describe a valid record.
    #[error("invalid document: {0}")]
    Model(#[from] ModelError),
}
