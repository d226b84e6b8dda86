//! Quaternion rabbit

use holo_core::color::*;
use holo_core::evaluator::*;
use holo_core::geometry::*;
use holo_core::numeric::*;

/// The quaternion "rabbit" set of `q ← λ q (1 - q)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rabbit {
    /// The multiplier `λ`.
    pub lambda: Quaternion,

    /// Number of iterations.
    pub max_iterations: u32,
}

impl Default for Rabbit {
    fn default() -> Self {
        Self {
            lambda: Quaternion::from_components(-0.57, 1.0, 0.0, 0.0),
            max_iterations: 32,
        }
    }
}

impl Rabbit {
    /// Returns `true` if the orbit of a point stays within radius 2.
    ///
    /// * `p` - The point.
    pub fn is_bounded(&self, p: &Point3f) -> bool {
        let one = Quaternion::default();
        let mut q = Quaternion::from_components(p.x * 1.25 + 0.5, p.y * 1.25, p.z * 1.25, 0.0);
        for _ in 0..self.max_iterations {
            q = (self.lambda * q) * (one - q);
            let d = q.length_squared();
            if d.is_nan() || d >= 4.0 {
                return false;
            }
        }
        true
    }
}

/// Returns a color that fades from blue through green to red with distance
/// from the origin.
///
/// * `p` - The point.
fn spherical_color(p: &Point3f) -> Rgb {
    let v = 0.7 * Vector3f::from(*p).length();
    let bump = |center: Float| (-8.0 * (v - center) * (v - center)).exp() * 255.0;
    rgb(bump(0.75), bump(0.5), bump(0.25))
}

impl Evaluator for Rabbit {
    fn name(&self) -> &'static str {
        "rabbit"
    }

    fn evaluate(&self, p: &Point3f, _env: &EvalEnv) -> Classification {
        if self.is_bounded(p) {
            Classification::from(spherical_color(p))
        } else {
            Classification::Empty
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
