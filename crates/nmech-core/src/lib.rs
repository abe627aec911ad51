//! # nmech-core — Foundational Types for NeuroMech Model Documents
//!
//! Every model crate in the workspace depends on `nmech-core`; it depends
//! on nothing internal.
//!
//! ## Key Pieces
//!
//! 1. **Record descriptors.** Each record type publishes a static
//!    [`RecordSpec`] listing its fields, their kinds and which are required.
//!
//! 2. **Untyped construction.** [`Record::from_value`] checks a dynamic value
//!    against the descriptor before decoding it, failing with a distinct
//!    [`ModelError`] variant for a missing required field, a mistyped value
//!    or an undeclared key.
//!
//! 3. **Metadata capability.** [`HasMetadata`] is the shared "may carry
//!    annotations" interface of the Mujoco records.
//!
//! 4. **Document formats.** [`Format`] names JSON, XML and YAML output;
//!    [`read_record`] loads JSON/YAML files back.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nmech-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod field;
pub mod format;
pub mod metadata;
pub mod record;

pub use error::{DocumentError, ModelError};
pub use field::{kind_of, serialize_finite, FieldKind, FieldSpec, RecordSpec};
pub use format::{parse_value, read_record, read_value, Format, UnknownFormat};
pub use metadata::{HasMetadata, Metadata};
pub use record::{Document, Record};
