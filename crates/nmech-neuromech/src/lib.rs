//! # nmech-neuromech — NeuroMech Anatomical Description
//!
//! Record types for a NeuroMech document:
//!
//! ```text
//! NeuroMech ── bodies: [Body] ── muscles: [Muscle] ── start: Point3D
//!                                                 └── end:   Point3D
//! ```
//!
//! The root carries three namespace strings that default to the NeuroMech
//! namespace, the XML Schema instance namespace and the schema location.

pub mod anatomy;
pub mod document;

pub use anatomy::{Body, Muscle, Point3D, BODY, MUSCLE, POINT3D};
pub use document::{
    example_document, NeuroMech, NEUROMECH, NEUROMECH_NS, NEUROMECH_SCHEMA_LOCATION, XSI_NS,
};
