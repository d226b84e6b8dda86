//! Spheres

use holo_core::color::*;
use holo_core::evaluator::*;
use holo_core::geometry::*;
use holo_core::numeric::*;

/// A solid sphere at the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    /// Radius.
    pub radius: Float,

    /// Color.
    pub color: Rgb,
}

impl Sphere {
    /// Create a new sphere at the origin. Negative radii are treated as
    /// their absolute value.
    ///
    /// * `radius` - Radius.
    /// * `color`  - Color.
    pub fn new(radius: Float, color: Rgb) -> Self {
        Self {
            radius: abs(radius),
            color,
        }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(0.3, Rgb::CYAN)
    }
}

impl Evaluator for Sphere {
    fn name(&self) -> &'static str {
        "sphere"
    }

    fn evaluate(&self, p: &Point3f, _env: &EvalEnv) -> Classification {
        if Vector3f::from(*p).length_squared() <= self.radius * self.radius {
            Classification::from(self.color)
        } else {
            Classification::Empty
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_and_outside() {
        let sphere = Sphere::default();
        let env = EvalEnv::default();
        assert_eq!(
            sphere.evaluate(&Point3f::zero(), &env),
            Classification::Solid(Rgb::CYAN)
        );
        assert!(sphere.evaluate(&Point3f::new(0.3, 0.0, 0.0), &env).is_solid());
        assert_eq!(
            sphere.evaluate(&Point3f::new(0.31, 0.0, 0.0), &env),
            Classification::Empty
        );
    }

    #[test]
    fn zero_radius_keeps_only_the_origin() {
        let sphere = Sphere::new(0.0, Rgb::WHITE);
        let env = EvalEnv::default();
        assert!(sphere.evaluate(&Point3f::zero(), &env).is_solid());
        assert!(!sphere.evaluate(&Point3f::new(0.0, 1e-3, 0.0), &env).is_solid());
    }
}
