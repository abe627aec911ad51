//! # Bodies
//!
//! `body` owns joints and geoms; `worldbody` owns lights, geoms and bodies.

use nmech_core::{FieldKind, FieldSpec, Metadata, Record, RecordSpec};
use serde::{Deserialize, Serialize};

use crate::elements::{Geom, Joint, Light, GEOM, JOINT, LIGHT};

/// Descriptor of [`Body`].
pub static BODY: RecordSpec = RecordSpec {
    name: "body",
    description: "A rigid body with its joints and geoms.",
    fields: &[
        FieldSpec::required("pos", FieldKind::Str, "Position of the body frame."),
        FieldSpec::optional("joints", FieldKind::List(&JOINT), "Joints of the body."),
        FieldSpec::optional("geoms", FieldKind::List(&GEOM), "Geoms attached to the body."),
        FieldSpec::metadata(),
    ],
};

/// Descriptor of [`Worldbody`].
pub static WORLDBODY: RecordSpec = RecordSpec {
    name: "worldbody",
    description: "The world frame: lights, static geoms and top-level bodies.",
    fields: &[
        FieldSpec::optional("lights", FieldKind::List(&LIGHT), "Light sources."),
        FieldSpec::optional("geoms", FieldKind::List(&GEOM), "Static geoms."),
        FieldSpec::optional("bodies", FieldKind::List(&BODY), "Top-level bodies."),
        FieldSpec::metadata(),
    ],
};

/// A rigid body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Body {
    /// Position, e.g. `"0 0 1"`. Required.
    pub pos: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub joints: Vec<Joint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geoms: Vec<Geom>,
    /// Free-form annotations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Body {
    /// A body at `pos` with no joints or geoms.
    pub fn new(pos: impl Into<String>) -> Self {
        Self {
            pos: pos.into(),
            joints: Vec::new(),
            geoms: Vec::new(),
            metadata: None,
        }
    }

    /// Append a joint.
    pub fn with_joint(mut self, joint: Joint) -> Self {
        self.joints.push(joint);
        self
    }

    /// Append a geom.
    pub fn with_geom(mut self, geom: Geom) -> Self {
        self.geoms.push(geom);
        self
    }
}

/// The world body of a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Worldbody {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lights: Vec<Light>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geoms: Vec<Geom>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bodies: Vec<Body>,
    /// Free-form annotations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Worldbody {
    /// An empty world body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a light.
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Append a static geom.
    pub fn with_geom(mut self, geom: Geom) -> Self {
        self.geoms.push(geom);
        self
    }

    /// Append a top-level body.
    pub fn with_body(mut self, body: Body) -> Self {
        self.bodies.push(body);
        self
    }

    /// Geoms owned by the world body and by all of its bodies.
    pub fn geom_count(&self) -> usize {
        self.geoms.len() + self.bodies.iter().map(|b| b.geoms.len()).sum::<usize>()
    }
}

impl Record for Body {
    fn spec() -> &'static RecordSpec {
        &BODY
    }
}

impl Record for Worldbody {
    fn spec() -> &'static RecordSpec {
        &WORLDBODY
    }
}

impl_has_metadata!(Body, Worldbody);
