//! # NeuroMech Document
//!
//! The `neuromech` root record, its namespace constants, and the example
//! document.

use nmech_core::{Document, FieldKind, FieldSpec, Record, RecordSpec};
use serde::{Deserialize, Serialize};

use crate::anatomy::{Body, Muscle, Point3D, BODY};

/// Default XML namespace of NeuroMech documents.
pub const NEUROMECH_NS: &str = "http://www.neuromech.org/schema/neuromlech";

/// XML Schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Namespace / schema location pair for `xsi:schemaLocation`.
pub const NEUROMECH_SCHEMA_LOCATION: &str = "http://www.neuromech.org/schema/neuromlech https://raw.github.com/NeuroML/NeuroMech/development/NeuroMech_v0.1.xsd";

/// Descriptor of [`NeuroMech`].
pub static NEUROMECH: RecordSpec = RecordSpec {
    name: "neuromech",
    description: "Root of a NeuroMech anatomical description.",
    fields: &[
        FieldSpec::required("id", FieldKind::Str, "Identifier of the document."),
        FieldSpec::optional("xmlns", FieldKind::Str, "Default namespace.").with_default(NEUROMECH_NS),
        FieldSpec::optional("xmlns_xsi", FieldKind::Str, "XML Schema instance namespace.")
            .with_default(XSI_NS)
            .with_xml_name("xmlns:xsi"),
        FieldSpec::optional("xmlns_loc", FieldKind::Str, "Schema location.")
            .with_default(NEUROMECH_SCHEMA_LOCATION)
            .with_xml_name("xsi:schemaLocation"),
        FieldSpec::optional("bodies", FieldKind::List(&BODY), "Bodies of the model."),
    ],
};

fn default_xmlns() -> String {
    NEUROMECH_NS.to_string()
}

fn default_xmlns_xsi() -> String {
    XSI_NS.to_string()
}

fn default_xmlns_loc() -> String {
    NEUROMECH_SCHEMA_LOCATION.to_string()
}

/// A NeuroMech document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NeuroMech {
    /// Identifier; also the stem of rendered file names. Required.
    pub id: String,
    #[serde(default = "default_xmlns")]
    pub xmlns: String,
    #[serde(default = "default_xmlns_xsi")]
    pub xmlns_xsi: String,
    #[serde(default = "default_xmlns_loc")]
    pub xmlns_loc: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bodies: Vec<Body>,
}

impl NeuroMech {
    /// An empty document with the standard namespaces.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            xmlns: default_xmlns(),
            xmlns_xsi: default_xmlns_xsi(),
            xmlns_loc: default_xmlns_loc(),
            bodies: Vec::new(),
        }
    }

    /// Append a body.
    pub fn with_body(mut self, body: Body) -> Self {
        self.bodies.push(body);
        self
    }

    /// Look up a body by identifier.
    pub fn body(&self, id: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Number of muscles across all bodies.
    pub fn muscle_count(&self) -> usize {
        self.bodies.iter().map(|b| b.muscles.len()).sum()
    }
}

impl Record for NeuroMech {
    fn spec() -> &'static RecordSpec {
        &NEUROMECH
    }
}

impl Document for NeuroMech {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The example document: a forelimb with a single bicep.
pub fn example_document() -> NeuroMech {
    let bicep = Muscle::spanning("bicep", Point3D::new(0.0, 0.0, 0.0), Point3D::new(10.0, 10.0, 0.0));
    NeuroMech::new("TestNeuroMech").with_body(Body::new("forelimb").with_muscle(bicep))
}
