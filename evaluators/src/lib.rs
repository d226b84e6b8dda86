//! Evaluators

#[macro_use]
extern crate log;

mod bristorbrot;
mod interference;
mod julia;
mod lattice;
mod mandelbulb;
mod pacman;
mod quaternion_julia;
mod rabbit;
mod ripples;
mod rounded_box;
mod sphere;
mod torus;
mod twin_blobs;

use holo_core::color::*;
use holo_core::evaluator::*;

// Re-export
pub use bristorbrot::*;
pub use interference::*;
pub use julia::*;
pub use lattice::*;
pub use mandelbulb::*;
pub use pacman::*;
pub use quaternion_julia::*;
pub use rabbit::*;
pub use ripples::*;
pub use rounded_box::*;
pub use sphere::*;
pub use torus::*;
pub use twin_blobs::*;

/// Returns the default evaluators in selection order.
pub fn default_registry() -> EvaluatorRegistry {
    let registry = EvaluatorRegistry::default()
        .with(Mandelbulb::palette())
        .with(Rabbit::default())
        .with(Bristorbrot::palette())
        .with(TwinBlobs::default())
        .with(Lattice)
        .with(Interference::default())
        .with(Pacman)
        .with(Julia::default())
        .with(QuaternionJulia::default())
        .with(Ripples::default())
        .with(RoundedBox::default())
        .with(Torus::default())
        .with(Sphere::default())
        .with(Bristorbrot::interior(Rgb::WHITE))
        .with(Mandelbulb::interior(Rgb::WHITE));
    debug!("Evaluators: {:?}", registry);
    registry
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use holo_core::geometry::*;
    use holo_core::numeric::*;
    use proptest::prelude::*;

    #[test]
    fn registry_order() {
        assert_eq!(
            default_registry().names(),
            vec![
                "mandelbulb",
                "rabbit",
                "bristorbrot",
                "twin-blobs",
                "lattice",
                "interference",
                "pacman",
                "julia",
                "quaternion-julia",
                "ripples",
                "rounded-box",
                "torus",
                "sphere",
                "bristorbrot-interior",
                "mandelbulb-interior",
            ]
        );
    }

    /// Solid points never carry the reserved empty color.
    fn check_total(p: &Point3f, env: &EvalEnv) {
        let registry = default_registry();
        for i in 0..registry.len() {
            if let Some(e) = registry.get(i) {
                if let Classification::Solid(c) = e.evaluate(p, env) {
                    assert!(!c.is_black(), "{} at {:?}", e.name(), p);
                }
            }
        }
    }

    #[test]
    fn origin_and_axes() {
        let mut points = vec![Point3f::zero()];
        for v in [-1.0, -0.5, 0.5, 1.0] {
            points.push(Point3f::new(v, 0.0, 0.0));
            points.push(Point3f::new(0.0, v, 0.0));
            points.push(Point3f::new(0.0, 0.0, v));
        }
        for (i, palette) in PALETTES.iter().enumerate() {
            let env = EvalEnv::new(i as Float, *palette);
            for p in points.iter() {
                check_total(p, &env);
            }
        }
    }

    #[test]
    fn static_sphere_scenarios() {
        let registry = default_registry();
        let env = EvalEnv::default();
        let sphere = registry.position("sphere").and_then(|i| registry.get(i));
        assert!(sphere.map_or(false, |s| s.evaluate(&Point3f::zero(), &env).is_solid()));
        assert!(sphere.map_or(false, |s| !s.evaluate(&Point3f::new(0.31, 0.0, 0.0), &env).is_solid()));
    }

    prop_compose! {
        fn point()(x in -2.0..2.0f32, y in -2.0..2.0f32, z in -2.0..2.0f32) -> Point3f {
            Point3f::new(x, y, z)
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10_000))]

        #[test]
        fn evaluators_are_total(p in point(), time in 0.0..1000.0f32, palette in 0..3usize) {
            check_total(&p, &EvalEnv::new(time, PALETTES[palette]));
        }
    }
}
