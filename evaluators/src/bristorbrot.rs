//! Bristorbrot

use holo_core::color::*;
use holo_core::evaluator::*;
use holo_core::geometry::*;

/// The Bristorbrot escape-time fractal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bristorbrot {
    /// Evaluator name.
    name: &'static str,

    /// Iteration limits.
    pub params: EscapeParams,

    /// Shading policy.
    pub shading: Shading,
}

impl Bristorbrot {
    /// Returns the variant shaded from the palette by escape index.
    pub fn palette() -> Self {
        Self {
            name: "bristorbrot",
            params: EscapeParams::new(16, 200.0),
            shading: Shading::Palette,
        }
    }

    /// Returns the variant that is solid wherever the orbit stays bounded.
    ///
    /// * `color` - Interior color.
    pub fn interior(color: Rgb) -> Self {
        Self {
            name: "bristorbrot-interior",
            params: EscapeParams::new(30, 200.0),
            shading: Shading::Interior(color),
        }
    }

    /// Runs the recurrence for a point.
    ///
    /// * `p` - The point.
    pub fn escape_time(&self, p: &Point3f) -> EscapeTime {
        let c = Vector3f::from(*p);
        self.params.iterate(c, |z| bristorbrot_step(z, &c))
    }
}

/// Returns the next orbit point `(x²-y²-z², y(2x-z), z(2x+y)) + c`.
///
/// * `z` - The current orbit point.
/// * `c` - The constant term.
#[inline]
pub fn bristorbrot_step(z: &Vector3f, c: &Vector3f) -> Vector3f {
    Vector3f::new(
        z.x * z.x - z.y * z.y - z.z * z.z,
        (z.x * 2.0 - z.z) * z.y,
        (z.x * 2.0 + z.y) * z.z,
    ) + *c
}

impl Evaluator for Bristorbrot {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, p: &Point3f, env: &EvalEnv) -> Classification {
        self.shading.shade(&self.escape_time(p), &env.palette)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
