//! Lattice

use holo_core::color::*;
use holo_core::evaluator::*;
use holo_core::geometry::*;
use holo_core::numeric::*;

/// Side of the lattice grid in cells.
const GRID: Float = 128.0;

/// A shell with a cube at its center and a rod lattice between them.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Lattice;

/// Returns `true` if a grid coordinate lies on a rod.
///
/// * `v` - Grid coordinate.
fn on_rod(v: Float) -> bool {
    let m = (v - 13.0) as i32 & 31;
    m < 2 || (4..6).contains(&m)
}

/// Returns the rippled base brightness of a point in grid coordinates.
///
/// * `g` - Grid coordinates.
fn base(g: &Vector3f) -> Float {
    128.0 + (((g.x * 0.5).sin() + (g.y * 0.4).cos() + (g.z * 0.2).cos()) * 16.0).trunc()
}

/// Returns the brightness of a point in grid coordinates; 0 or below means
/// empty.
///
/// * `g` - Grid coordinates in [0, 128].
pub fn brightness(g: &Vector3f) -> Float {
    let d = (*g - Vector3f::new(64.0, 64.0, 64.0)).length_squared();
    let ca = base(g);
    let in_cube = |v: Float| v > 52.0 && v < 76.0;

    if d > 60.0 * 60.0 {
        ca
    } else if in_cube(g.x) && in_cube(g.y) && in_cube(g.z) {
        ca + 32.0
    } else if [g.x, g.y, g.z].iter().filter(|v| on_rod(**v)).count() >= 2 {
        ca - 32.0
    } else {
        0.0
    }
}

impl Evaluator for Lattice {
    fn name(&self) -> &'static str {
        "lattice"
    }

    fn evaluate(&self, p: &Point3f, _env: &EvalEnv) -> Classification {
        let g = (Vector3f::from(*p) * 0.5 + Vector3f::new(0.5, 0.5, 0.5)) * GRID;
        let c = brightness(&g);
        if c <= 0.0 {
            return Classification::Empty;
        }
        let j = (c + 16.0) * (c + 16.0);
        Classification::from(rgb(j / 289.0, j / 314.0, j / 414.0))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_cube_is_brighter() {
        let env = EvalEnv::default();
        assert!(Lattice.evaluate(&Point3f::zero(), &env).is_solid());

        let g = Vector3f::new(64.0, 64.0, 64.0);
        assert_eq!(brightness(&g), base(&g) + 32.0);
    }

    #[test]
    fn shell_and_gaps() {
        let env = EvalEnv::default();

        // Outside the radius 60 shell.
        assert!(Lattice.evaluate(&Point3f::new(1.0, 1.0, 1.0), &env).is_solid());

        // Between the cube and the shell, off every rod.
        let g = Vector3f::new(64.0 + 30.0, 64.0 - 3.0, 64.0 - 3.0);
        assert!(!on_rod(g.x) && !on_rod(g.y));
        assert_eq!(brightness(&g), 0.0);
    }

    #[test]
    fn rods_need_two_axes() {
        assert!(on_rod(13.5));
        assert!(on_rod(17.0));
        assert!(!on_rod(16.0));
        assert!(on_rod(45.0));

        let g = Vector3f::new(13.5 + 32.0, 13.5 + 32.0, 60.0);
        assert_eq!(brightness(&g), base(&g) - 32.0);
    }
}
