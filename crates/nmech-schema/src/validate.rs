//! # Schema Validation
//!
//! Validates untyped documents against the generated JSON Schema of their
//! root record. Unlike checked construction, which stops at the first bad
//! field, validation reports every violation with its instance path.

use std::fmt;
use std::path::Path;

use nmech_core::{DocumentError, RecordSpec};
use serde_json::Value;
use thiserror::Error;

use crate::generate::{schema_for, schema_name};

/// Error during schema validation.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The document did not conform to the schema.
    #[error("validation failed against schema '{schema_name}':\n{violations}")]
    ValidationFailed {
        /// Name of the schema that was validated against.
        schema_name: String,
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },

    /// The generated schema could not be compiled.
    #[error("validator build error for schema '{schema_name}': {reason}")]
    ValidatorBuildError {
        /// Schema name.
        schema_name: String,
        /// Reason the validator could not be built.
        reason: String,
    },

    /// The document file could not be read or parsed.
    #[error("{0}")]
    Document(#[from] DocumentError),
}

/// A single validation violation.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating value in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// A compiled validator for documents rooted at one record type.
pub struct DocumentValidator {
    schema_name: String,
    schema: Value,
    validator: jsonschema::Validator,
}

impl fmt::Debug for DocumentValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentValidator")
            .field("schema_name", &self.schema_name)
            .finish_non_exhaustive()
    }
}

impl DocumentValidator {
    /// Generate and compile the schema for documents rooted at `spec`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError::ValidatorBuildError`] if the
    /// generated schema does not compile.
    pub fn new(spec: &'static RecordSpec) -> Result<Self, SchemaValidationError> {
        let schema_name = schema_name(spec);
        let schema = schema_for(spec);

        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        let validator = opts
            .build(&schema)
            .map_err(|e| SchemaValidationError::ValidatorBuildError {
                schema_name: schema_name.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            schema_name,
            schema,
            validator,
        })
    }

    /// Schema name, e.g. `neuromech.schema.json`.
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// The generated schema.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Validate a parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError::ValidationFailed`] listing every
    /// violation if the document is invalid.
    pub fn validate(&self, instance: &Value) -> Result<(), SchemaValidationError> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::ValidationFailed {
                schema_name: self.schema_name.clone(),
                violations: ValidationViolations { violations },
            })
        }
    }

    /// Validate a `.json`, `.yaml` or `.yml` document file.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError::Document`] if the file cannot be
    /// read or parsed, otherwise as [`DocumentValidator::validate`].
    pub fn validate_file(&self, path: &Path) -> Result<(), SchemaValidationError> {
        let value = nmech_core::read_value(path)?;
        self.validate(&value).map_err(|e| match e {
            SchemaValidationError::ValidationFailed { violations, .. } => {
                SchemaValidationError::ValidationFailed {
                    schema_name: format!("{} ({})", self.schema_name, path.display()),
                    violations,
                }
            }
            other => other,
        })
    }
}
