//! Julia

use holo_core::color::*;
use holo_core::evaluator::*;
use holo_core::geometry::*;
use holo_core::numeric::*;

/// A 3-D Julia set colored by an orbit trap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Julia {
    /// The constant term.
    pub constant: Vector3f,

    /// Scale applied to input points.
    pub scale: Float,

    /// Iteration limits.
    pub params: EscapeParams,

    /// Trap used for coloring.
    pub trap: OrbitTrap,

    /// Reference point for the final orbit point.
    pub reference: Point3f,
}

impl Default for Julia {
    fn default() -> Self {
        Self {
            constant: Vector3f::new(-0.7, 0.2, -0.5),
            scale: 1.5,
            params: EscapeParams::new(9, 4.0),
            trap: OrbitTrap::Plane {
                normal: Vector3f::new(1.0, 0.0, 0.0),
                offset: 0.0,
            },
            reference: Point3f::new(0.5, 0.3, 0.2),
        }
    }
}

/// Returns the next orbit point `(x²-y²-z², 2xy, 2xz) + c`.
///
/// * `z` - The current orbit point.
/// * `c` - The constant term.
#[inline]
pub fn julia_step(z: &Vector3f, c: &Vector3f) -> Vector3f {
    Vector3f::new(
        z.x * z.x - z.y * z.y - z.z * z.z,
        2.0 * z.x * z.y,
        2.0 * z.x * z.z,
    ) + *c
}

impl Evaluator for Julia {
    fn name(&self) -> &'static str {
        "julia"
    }

    fn evaluate(&self, p: &Point3f, _env: &EvalEnv) -> Classification {
        let c = self.constant;
        let mut tracker = self.trap.tracker();
        let result = self.params.iterate(Vector3f::from(*p) * self.scale, |z| {
            let w = julia_step(z, &c);
            tracker.update(&w);
            w
        });
        if result.escaped() {
            return Classification::Empty;
        }

        let d1 = tracker.min_distance * 2.0;
        let d2 = Point3f::from(result.z).distance(&self.reference) * 0.3;
        Classification::from(rgb(
            112.0 + 145.0 * d1 - 20.0 * d2,
            112.0 + 163.0 * d1 - 20.0 * d2,
            92.0 + 163.0 * d1 - 30.0 * d2,
        ))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recurrence() {
        let c = Vector3f::new(-0.7, 0.2, -0.5);
        let w = julia_step(&Vector3f::new(1.0, 2.0, 3.0), &c);
        assert_eq!(w, Vector3f::new(1.0 - 4.0 - 9.0 - 0.7, 4.0 + 0.2, 6.0 - 0.5));
    }

    #[test]
    fn far_points_escape() {
        let julia = Julia::default();
        let env = EvalEnv::default();
        assert_eq!(julia.evaluate(&Point3f::new(1.0, 1.0, 1.0), &env), Classification::Empty);
        assert_eq!(julia.evaluate(&Point3f::new(-1.0, 0.0, 0.0), &env), Classification::Empty);
    }

    /// Computes the color of a bounded point without the escape helper.
    fn direct_color(julia: &Julia, p: &Point3f) -> Rgb {
        let mut z = Vector3f::from(*p) * julia.scale;
        let mut min_x = Float::INFINITY;
        for _ in 0..julia.params.max_iterations {
            z = julia_step(&z, &julia.constant);
            min_x = min(min_x, abs(z.x));
        }
        let d1 = min_x * 2.0;
        let d2 = Point3f::from(z).distance(&julia.reference) * 0.3;
        rgb(
            112.0 + 145.0 * d1 - 20.0 * d2,
            112.0 + 163.0 * d1 - 20.0 * d2,
            92.0 + 163.0 * d1 - 30.0 * d2,
        )
    }

    #[test]
    fn bounded_points_take_trap_color() {
        let julia = Julia::default();
        let env = EvalEnv::default();

        let mut found = false;
        for i in -25..=25 {
            for j in -25..=25 {
                for k in -25..=25 {
                    let p = Point3f::new(i as Float * 0.04, j as Float * 0.04, k as Float * 0.04);
                    if let Classification::Solid(color) = julia.evaluate(&p, &env) {
                        assert_eq!(color, direct_color(&julia, &p));
                        found = true;
                    }
                }
            }
        }
        assert!(found);
    }
}
