//! Rounded boxes

use holo_core::color::*;
use holo_core::evaluator::*;
use holo_core::geometry::*;
use holo_core::numeric::*;

/// A box centered at the origin with rounded edges.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoundedBox {
    /// Half size of the inner box.
    pub half_size: Vector3f,

    /// Rounding radius added around the inner box.
    pub margin: Float,

    /// Color.
    pub color: Rgb,
}

impl RoundedBox {
    /// Create a new rounded box.
    ///
    /// * `half_size` - Half size of the inner box.
    /// * `margin`    - Rounding radius.
    /// * `color`     - Color.
    pub fn new(half_size: Vector3f, margin: Float, color: Rgb) -> Self {
        Self {
            half_size: half_size.abs(),
            margin,
            color,
        }
    }
}

impl Default for RoundedBox {
    fn default() -> Self {
        Self::new(Vector3f::new(0.3, 0.4, 0.1), 0.05, Rgb::YELLOW)
    }
}

impl Evaluator for RoundedBox {
    fn name(&self) -> &'static str {
        "rounded-box"
    }

    fn evaluate(&self, p: &Point3f, _env: &EvalEnv) -> Classification {
        let q = (Vector3f::from(*p).abs() - self.half_size).max(&Vector3f::zero());
        let f = self.margin - min(q.max_component(), 0.0);
        if q.length_squared() < f * f {
            Classification::from(self.color)
        } else {
            Classification::Empty
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
