//! # nmech-mujoco — Mujoco Scene Description
//!
//! Record types for a Mujoco scene document:
//!
//! ```text
//! Mujoco ── worldbodies: [Worldbody]
//!              ├── lights: [Light]
//!              ├── geoms:  [Geom]
//!              └── bodies: [Body] ── joints: [Joint]
//!                                └── geoms:  [Geom]
//! ```
//!
//! Every record may carry optional free-form metadata through
//! [`HasMetadata`](nmech_core::HasMetadata). Vector-valued attributes
//! (`pos`, `size`, `rgba`, ...) are kept as space-separated strings exactly
//! as they appear in MJCF.

/// Implements [`HasMetadata`](nmech_core::HasMetadata) for records that
/// embed a `metadata: Option<Metadata>` field.
macro_rules! impl_has_metadata {
    ($($record:ty),+ $(,)?) => {
        $(
            impl nmech_core::HasMetadata for $record {
                fn metadata(&self) -> Option<&nmech_core::Metadata> {
                    self.metadata.as_ref()
                }

                fn metadata_mut(&mut self) -> &mut Option<nmech_core::Metadata> {
                    &mut self.metadata
                }
            }
        )+
    };
}

pub mod body;
pub mod document;
pub mod elements;

pub use body::{Body, Worldbody, BODY, WORLDBODY};
pub use document::{example_document, Mujoco, MUJOCO};
pub use elements::{Geom, Joint, Light, GEOM, JOINT, LIGHT};
