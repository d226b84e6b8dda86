//! Twin blobs

use holo_core::color::*;
use holo_core::evaluator::*;
use holo_core::geometry::*;
use holo_core::numeric::*;

/// Two animated blobs and a stem joined by an inverse-square field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TwinBlobs {
    /// Field strength above which points are solid.
    pub threshold: Float,
}

impl Default for TwinBlobs {
    fn default() -> Self {
        Self { threshold: 20.0 }
    }
}

impl TwinBlobs {
    /// Returns the squared distances to the two blobs and the stem.
    ///
    /// * `p`    - The point.
    /// * `time` - Animation time in seconds.
    pub fn distances(p: &Point3f, time: Float) -> (Float, Float, Float) {
        let co = (time * 0.5).cos();
        let si = (time * 0.425).sin();
        let warped = Vector3f::new(p.x * p.x * 1.5 - 0.5, p.y * p.y * 1.5 - 0.5, p.z * p.z * 4.0 - 0.25);

        let d1 = (warped + Vector3f::new(co * 0.5, -si * 0.5, abs(si) * 0.4)).length_squared();
        let d2 = (warped + Vector3f::new(-co * 0.5, si * 0.5, abs(co) * 0.4)).length_squared();

        let fz = -p.z * 2.0 - co * 0.1;
        let d3 = p.x * p.x + p.y * p.y + fz * fz * fz;
        (d1, d2, d3)
    }
}

impl Evaluator for TwinBlobs {
    fn name(&self) -> &'static str {
        "twin-blobs"
    }

    fn evaluate(&self, p: &Point3f, env: &EvalEnv) -> Classification {
        let (d1, d2, d3) = Self::distances(p, env.time);
        if d1.recip() + d2.recip() + d3.recip() > self.threshold {
            Classification::from(rgb(d1 * 256.0, d2 * 256.0, d3 * 256.0))
        } else {
            Classification::Empty
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
