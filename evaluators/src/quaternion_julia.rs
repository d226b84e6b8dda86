//! Quaternion Julia

use holo_core::color::*;
use holo_core::evaluator::*;
use holo_core::geometry::*;
use holo_core::numeric::*;

/// A quaternion Julia set of `q ← q² + c` where both `c` and the starting
/// point are derived from the sampled point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuaternionJulia {
    /// Number of iterations.
    pub max_iterations: u32,

    /// Escape threshold for `|q|²`.
    pub max_distance: Float,

    /// Trap on the imaginary part used to shade the color.
    pub trap: OrbitTrap,
}

impl Default for QuaternionJulia {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            max_distance: 4.0,
            trap: OrbitTrap::Sphere {
                center: Point3f::zero(),
                radius: 1.0,
            },
        }
    }
}

impl QuaternionJulia {
    /// Returns the constant term for a point.
    ///
    /// * `p` - The point.
    pub fn constant(p: &Point3f) -> Quaternion {
        Quaternion::from_components(p.y * 0.5 - 0.25, p.x * 0.5 + 0.6, p.z * 0.5 + 0.6, 0.0)
    }

    /// Returns the starting quaternion for a point.
    ///
    /// * `p` - The point.
    pub fn start(p: &Point3f) -> Quaternion {
        Quaternion::from_components(p.z, p.x, 0.0, p.y)
    }
}

impl Evaluator for QuaternionJulia {
    fn name(&self) -> &'static str {
        "quaternion-julia"
    }

    fn evaluate(&self, p: &Point3f, _env: &EvalEnv) -> Classification {
        let c = Self::constant(p);
        let mut q = Self::start(p);
        let mut tracker = self.trap.tracker();
        for _ in 0..self.max_iterations {
            q = q.square() + c;
            let d = q.length_squared();
            if d.is_nan() || d > self.max_distance {
                return Classification::Empty;
            }
            tracker.update(&q.v);
        }

        let shade = 0.6 + 0.4 * tracker.min_distance.clamp_unit();
        Classification::from(rgb(
            (p.x * 120.0 + 75.0) * shade,
            (p.y * 120.0 + 25.0) * shade,
            (p.z * 120.0 + 100.0) * shade,
        ))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
