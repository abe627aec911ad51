//! # Record and Document Traits
//!
//! [`Record`] ties a typed struct to its static descriptor and provides
//! untyped construction. [`Document`] marks the root record of a model
//! tree and exposes the identifier used to name output files.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ModelError;
use crate::field::RecordSpec;

/// A record type with a static descriptor.
pub trait Record: Serialize + DeserializeOwned {
    /// Descriptor of this record type.
    fn spec() -> &'static RecordSpec;

    /// Construct the record from an untyped value.
    ///
    /// The value is checked against [`Record::spec`] before anything is
    /// decoded, so the caller either gets a complete record or an error
    /// naming the first offending field.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingField`] for an absent required field,
    /// [`ModelError::TypeMismatch`] for a mistyped value and
    /// [`ModelError::UnknownField`] for an undeclared key.
    fn from_value(value: &Value) -> Result<Self, ModelError> {
        let spec = Self::spec();
        spec.check(value)?;
        let mut value = value.clone();
        spec.drop_nulls(&mut value);
        serde_json::from_value(value).map_err(|e| ModelError::Serialization(e.to_string()))
    }

    /// The record as an untyped value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Serialization`] if a value cannot be
    /// represented, such as a non-finite coordinate.
    fn to_value(&self) -> Result<Value, ModelError> {
        serde_json::to_value(self).map_err(|e| ModelError::Serialization(e.to_string()))
    }
}

/// The root record of a model tree.
pub trait Document: Record {
    /// Identifier of the document; output files are named after it.
    fn id(&self) -> &str;
}
