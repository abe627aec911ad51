//! # Mujoco Document
//!
//! The `mujoco` root record and the example scene.

use nmech_core::{Document, FieldKind, FieldSpec, HasMetadata, Metadata, Record, RecordSpec};
use serde::{Deserialize, Serialize};

use crate::body::{Body, Worldbody, WORLDBODY};
use crate::elements::{Geom, Joint, Light};

/// Descriptor of [`Mujoco`].
pub static MUJOCO: RecordSpec = RecordSpec {
    name: "mujoco",
    description: "Root of a Mujoco scene description.",
    fields: &[
        FieldSpec::required("model", FieldKind::Str, "Name of the model."),
        FieldSpec::optional("worldbodies", FieldKind::List(&WORLDBODY), "World bodies of the scene."),
        FieldSpec::metadata(),
    ],
};

/// A Mujoco scene document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Mujoco {
    /// Model name; also the stem of rendered file names. Required.
    pub model: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub worldbodies: Vec<Worldbody>,
    /// Free-form annotations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Mujoco {
    /// An empty scene named `model`.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            worldbodies: Vec::new(),
            metadata: None,
        }
    }

    /// Append a world body.
    pub fn with_worldbody(mut self, worldbody: Worldbody) -> Self {
        self.worldbodies.push(worldbody);
        self
    }
}

impl Record for Mujoco {
    fn spec() -> &'static RecordSpec {
        &MUJOCO
    }
}

impl Document for Mujoco {
    fn id(&self) -> &str {
        &self.model
    }
}

impl_has_metadata!(Mujoco);

/// The example scene: a ground plane under a light, with a free-floating
/// red box and a yellow sphere.
pub fn example_document() -> Mujoco {
    let mut doc = Mujoco::new("TestMujoco");
    doc.annotate("description", "Testing a Mujoco document");

    let worldbody = Worldbody::new()
        .with_light(Light::new().with_diffuse(".5 .5 .5").with_pos("0 0 3").with_dir("0 0 -1"))
        .with_geom(Geom::new("plane").with_size("10 1 0.1").with_rgba("0 0.9 0 1"))
        .with_body(
            Body::new("0 0 1")
                .with_joint(Joint::new("free"))
                .with_geom(Geom::new("box").with_size("0.1 0.1 0.1").with_rgba("1 0 0 1")),
        )
        .with_body(
            Body::new("0.3 0.3 1.5")
                .with_joint(Joint::new("free"))
                .with_geom(Geom::new("sphere").with_size("0.15").with_rgba("1 1 0 1")),
        );

    doc.with_worldbody(worldbody)
}
