//! # nmech-schema — Schema Contracts
//!
//! Generates JSON Schemas (Draft 2020-12) from the record descriptors of a
//! document root and validates untyped documents against them with the
//! `jsonschema` crate.
//!
//! ## Generation (`generate`)
//!
//! - [`schema_for`] — the schema of documents rooted at a record, with
//!   every nested record under `$defs`.
//!
//! ## Validation (`validate`)
//!
//! - [`DocumentValidator::validate`] — reports every violation with its
//!   instance path, schema path and message.
//! - [`DocumentValidator::validate_file`] — the same for a JSON or YAML file.

pub mod generate;
pub mod validate;

pub use generate::{schema_for, schema_name, DRAFT_2020_12, SCHEMA_URI_PREFIX};
pub use validate::{DocumentValidator, SchemaValidationError, ValidationViolations, Violation};
