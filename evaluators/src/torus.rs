//! Tori

use holo_core::color::*;
use holo_core::evaluator::*;
use holo_core::geometry::*;
use holo_core::numeric::*;

/// A solid torus around the y-axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Torus {
    /// Distance from the center to the center of the tube.
    pub major_radius: Float,

    /// Radius of the tube.
    pub minor_radius: Float,

    /// Color.
    pub color: Rgb,
}

impl Torus {
    /// Create a new torus.
    ///
    /// * `major_radius` - Distance from the center to the center of the tube.
    /// * `minor_radius` - Radius of the tube.
    /// * `color`        - Color.
    pub fn new(major_radius: Float, minor_radius: Float, color: Rgb) -> Self {
        Self {
            major_radius,
            minor_radius: abs(minor_radius),
            color,
        }
    }
}

impl Default for Torus {
    fn default() -> Self {
        Self::new(0.2, 0.1, Rgb::MAGENTA)
    }
}

impl Evaluator for Torus {
    fn name(&self) -> &'static str {
        "torus"
    }

    fn evaluate(&self, p: &Point3f, _env: &EvalEnv) -> Classification {
        let v = Vector3f::from(*p);
        let q = Vector2f::new(v.xz().length() - self.major_radius, v.y);
        if q.length_squared() <= self.minor_radius * self.minor_radius {
            Classification::from(self.color)
        } else {
            Classification::Empty
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
