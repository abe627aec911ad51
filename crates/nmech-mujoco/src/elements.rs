//! # Leaf Elements
//!
//! `light`, `geom` and `joint`: the records that own no children.

use nmech_core::{FieldKind, FieldSpec, Metadata, Record, RecordSpec};
use serde::{Deserialize, Serialize};

/// Descriptor of [`Light`].
pub static LIGHT: RecordSpec = RecordSpec {
    name: "light",
    description: "A light source in the world body.",
    fields: &[
        FieldSpec::optional("directional", FieldKind::Str, "Whether the light is directional."),
        FieldSpec::optional("diffuse", FieldKind::Str, "Diffuse RGB color."),
        FieldSpec::optional("pos", FieldKind::Str, "Position of the light."),
        FieldSpec::optional("dir", FieldKind::Str, "Direction the light points in."),
        FieldSpec::metadata(),
    ],
};

/// Descriptor of [`Geom`].
pub static GEOM: RecordSpec = RecordSpec {
    name: "geom",
    description: "A geometric shape attached to a body or the world.",
    fields: &[
        FieldSpec::required("type", FieldKind::Str, "Shape type, e.g. plane, box, sphere."),
        FieldSpec::optional("size", FieldKind::Str, "Shape size parameters."),
        FieldSpec::optional("rgba", FieldKind::Str, "RGBA color."),
        FieldSpec::metadata(),
    ],
};

/// Descriptor of [`Joint`].
pub static JOINT: RecordSpec = RecordSpec {
    name: "joint",
    description: "A degree-of-freedom connection between a body and its parent.",
    fields: &[
        FieldSpec::required("type", FieldKind::Str, "Joint type, e.g. free, hinge."),
        FieldSpec::metadata(),
    ],
};

/// A light source. All attributes are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Light {
    /// Directional flag, e.g. `"true"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directional: Option<String>,
    /// Diffuse color, e.g. `".5 .5 .5"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diffuse: Option<String>,
    /// Position, e.g. `"0 0 3"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    /// Direction, e.g. `"0 0 -1"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// Free-form annotations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Light {
    /// A light with every attribute unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directional flag.
    pub fn with_directional(mut self, directional: impl Into<String>) -> Self {
        self.directional = Some(directional.into());
        self
    }

    /// Set the diffuse color.
    pub fn with_diffuse(mut self, diffuse: impl Into<String>) -> Self {
        self.diffuse = Some(diffuse.into());
        self
    }

    /// Set the position.
    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    /// Set the direction.
    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = Some(dir.into());
        self
    }
}

/// A geometric shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Geom {
    /// Shape type. Required.
    #[serde(rename = "type")]
    pub geom_type: String,
    /// Size parameters, e.g. `"10 1 0.1"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Color, e.g. `"0 0.9 0 1"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgba: Option<String>,
    /// Free-form annotations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Geom {
    /// A geom of the given type with size and color unset.
    pub fn new(geom_type: impl Into<String>) -> Self {
        Self {
            geom_type: geom_type.into(),
            size: None,
            rgba: None,
            metadata: None,
        }
    }

    /// Set the size parameters.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the RGBA color.
    pub fn with_rgba(mut self, rgba: impl Into<String>) -> Self {
        self.rgba = Some(rgba.into());
        self
    }
}

/// A joint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Joint {
    /// Joint type. Required.
    #[serde(rename = "type")]
    pub joint_type: String,
    /// Free-form annotations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Joint {
    /// A joint of the given type.
    pub fn new(joint_type: impl Into<String>) -> Self {
        Self {
            joint_type: joint_type.into(),
            metadata: None,
        }
    }
}

impl Record for Light {
    fn spec() -> &'static RecordSpec {
        &LIGHT
    }
}

impl Record for Geom {
    fn spec() -> &'static RecordSpec {
        &GEOM
    }
}

impl Record for Joint {
    fn spec() -> &'static RecordSpec {
        &JOINT
    }
}

impl_has_metadata!(Light, Geom, Joint);
