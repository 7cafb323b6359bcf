//! Gas emission sources.

use crate::{GasType, Vector3};
use serde::{Deserialize, Serialize};

/// Geometry of the region filaments are released from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sourceType", rename_all = "lowercase")]
pub enum SourceShape {
    /// Everything is released at `position`.
    Point,
    /// Axis-aligned box centred on `position`.
    Box { size: Vector3 },
    /// Segment from `position` to `line_end`.
    Line {
        #[serde(rename = "lineEnd")]
        line_end: Vector3,
    },
    /// Sphere centred on `position`.
    Sphere { radius: f64 },
    /// Vertical cylinder whose base is centred on `position`.
    Cylinder {
        #[serde(default = "default_cylinder_radius")]
        radius: f64,
        #[serde(default = "default_cylinder_height")]
        height: f64,
    },
}

impl SourceShape {
    pub fn kind(&self) -> &'static str {
        match self {
            SourceShape::Point => "point",
            SourceShape::Box { .. } => "box",
            SourceShape::Line { .. } => "line",
            SourceShape::Sphere { .. } => "sphere",
            SourceShape::Cylinder { .. } => "cylinder",
        }
    }
}

/// A gas source as written in `sim.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasSource {
    #[serde(flatten)]
    pub shape: SourceShape,

    pub position: Vector3,

    #[serde(default)]
    pub gas_type: GasType,

    /// Filament sigma at release, in cm.
    #[serde(default = "default_initial_sigma")]
    pub initial_sigma: f64,

    /// Concentration at the centre of a fresh filament, in ppm.
    #[serde(default = "default_ppm_center")]
    pub ppm_center: f64,

    #[serde(rename = "numFilaments_sec", default = "default_filaments_per_second")]
    pub num_filaments_per_second: f64,
}

fn default_cylinder_radius() -> f64 {
    1.0
}

fn default_cylinder_height() -> f64 {
    0.5
}

fn default_initial_sigma() -> f64 {
    10.0
}

fn default_ppm_center() -> f64 {
    20.0
}

fn default_filaments_per_second() -> f64 {
    10.0
}

impl GasSource {
    /// A point source at `position` with default emission settings.
    pub fn point(position: Vector3, gas_type: GasType) -> Self {
        Self {
            shape: SourceShape::Point,
            position,
            gas_type,
            initial_sigma: default_initial_sigma(),
            ppm_center: default_ppm_center(),
            num_filaments_per_second: default_filaments_per_second(),
        }
    }
}

impl Default for GasSource {
    fn default() -> Self {
        Self::point(Vector3::ZERO, GasType::Unknown)
    }
}
