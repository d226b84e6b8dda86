//! Ripples

use holo_core::evaluator::*;
use holo_core::geometry::*;
use holo_core::numeric::*;

/// Constructive interference of two animated spherical waves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ripples {
    /// Wave number.
    pub frequency: Float,

    /// Wave speed.
    pub speed: Float,
}

impl Default for Ripples {
    fn default() -> Self {
        Self {
            frequency: 32.0,
            speed: 0.25,
        }
    }
}

impl Ripples {
    /// Returns the amplitude of a wave from a source on the x-axis.
    ///
    /// * `p`      - The point.
    /// * `source` - X-coordinate of the source.
    /// * `time`   - Animation time in seconds.
    fn wave(&self, p: &Point3f, source: Float, time: Float) -> Float {
        let d = p.distance(&Point3f::new(source, 0.0, 0.0));
        ((d - time * self.speed) * self.frequency).sin()
    }
}

impl Evaluator for Ripples {
    fn name(&self) -> &'static str {
        "ripples"
    }

    fn evaluate(&self, p: &Point3f, env: &EvalEnv) -> Classification {
        let a = self.wave(p, 0.5, env.time);
        let b = self.wave(p, -0.5, env.time);
        Classification::from(a + b > 1.0)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
