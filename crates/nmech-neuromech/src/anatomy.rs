//! # Anatomy Records
//!
//! Points, muscles spanning two points, and bodies that own muscles.

use nmech_core::{serialize_finite, FieldKind, FieldSpec, Record, RecordSpec};
use serde::{Deserialize, Serialize};

/// Descriptor of [`Point3D`].
pub static POINT3D: RecordSpec = RecordSpec {
    name: "point3d",
    description: "A point in 3D space.",
    fields: &[
        FieldSpec::required("x", FieldKind::Float, "x coordinate."),
        FieldSpec::required("y", FieldKind::Float, "y coordinate."),
        FieldSpec::required("z", FieldKind::Float, "z coordinate."),
    ],
};

/// Descriptor of [`Muscle`].
pub static MUSCLE: RecordSpec = RecordSpec {
    name: "muscle",
    description: "A muscle spanning a start and an end point.",
    fields: &[
        FieldSpec::required("id", FieldKind::Str, "Identifier of the muscle."),
        FieldSpec::optional("start", FieldKind::Record(&POINT3D), "Origin of the muscle."),
        FieldSpec::optional("end", FieldKind::Record(&POINT3D), "Insertion of the muscle."),
    ],
};

/// Descriptor of [`Body`].
pub static BODY: RecordSpec = RecordSpec {
    name: "body",
    description: "A body part and the muscles it contains.",
    fields: &[
        FieldSpec::required("id", FieldKind::Str, "Identifier of the body."),
        FieldSpec::optional("muscles", FieldKind::List(&MUSCLE), "Muscles of the body."),
    ],
};

/// A point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point3D {
    #[serde(serialize_with = "serialize_finite")]
    pub x: f64,
    #[serde(serialize_with = "serialize_finite")]
    pub y: f64,
    #[serde(serialize_with = "serialize_finite")]
    pub z: f64,
}

impl Point3D {
    pub const ORIGIN: Point3D = Point3D::new(0.0, 0.0, 0.0);

    /// A point at `(x, y, z)`. Non-finite coordinates fail serialization.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point3D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

/// A muscle. Each endpoint is owned by the muscle alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Muscle {
    /// Identifier. Required.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Point3D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Point3D>,
}

impl Muscle {
    /// A muscle with no endpoints.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            start: None,
            end: None,
        }
    }

    /// A muscle spanning `start` to `end`.
    pub fn spanning(id: impl Into<String>, start: Point3D, end: Point3D) -> Self {
        Self {
            id: id.into(),
            start: Some(start),
            end: Some(end),
        }
    }

    /// Straight-line length, when both endpoints are set.
    pub fn length(&self) -> Option<f64> {
        Some(self.start?.distance(&self.end?))
    }
}

/// A body part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Body {
    /// Identifier. Required.
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub muscles: Vec<Muscle>,
}

impl Body {
    /// A body with no muscles.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            muscles: Vec::new(),
        }
    }

    /// Append a muscle.
    pub fn with_muscle(mut self, muscle: Muscle) -> Self {
        self.muscles.push(muscle);
        self
    }

    /// Look up a muscle by identifier.
    pub fn muscle(&self, id: &str) -> Option<&Muscle> {
        self.muscles.iter().find(|m| m.id == id)
    }
}

impl Record for Point3D {
    fn spec() -> &'static RecordSpec {
        &POINT3D
    }
}

impl Record for Muscle {
    fn spec() -> &'static RecordSpec {
        &MUSCLE
    }
}

impl Record for Body {
    fn spec() -> &'static RecordSpec {
        &BODY
    }
}
