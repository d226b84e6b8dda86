//! Interference

use holo_core::color::*;
use holo_core::evaluator::*;
use holo_core::geometry::*;
use holo_core::numeric::*;

/// A sheet displaced by the interference of two animated circular waves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interference {
    /// Half thickness of the sheet before tapering.
    pub thickness: Float,
}

impl Default for Interference {
    fn default() -> Self {
        Self { thickness: 0.2 }
    }
}

/// Returns the sheet height at `(x, y)`.
///
/// * `x`    - X-coordinate.
/// * `y`    - Y-coordinate.
/// * `time` - Animation time in seconds.
pub fn height(x: Float, y: Float, time: Float) -> Float {
    let y2 = y * y * 10.0;
    let a = (x + 0.5) * (x + 0.5) * 10.0 + y2 + time;
    let b = (x - 0.5) * (x - 0.5) * 10.0 + y2 + time;
    (a.sin() + b.sin()) * 0.05
}

impl Evaluator for Interference {
    fn name(&self) -> &'static str {
        "interference"
    }

    fn evaluate(&self, p: &Point3f, env: &EvalEnv) -> Classification {
        let h = height(p.x, p.y, env.time);
        let taper = max((1.0 - p.x * p.x - p.y * p.y) * 2.0, 0.0);
        if p.z < (h + self.thickness) * taper && p.z > (h - self.thickness) * taper {
            Classification::from(rgb(p.x * 50.0 + 128.0, p.z * 128.0 + 128.0, p.y * 50.0 + 128.0))
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
    fn sheet_is_centered_on_height() {
        let sheet = Interference::default();
        for time in [0.0, 1.0, 2.5] {
            let env = EvalEnv::new(time, Palette::default());
            let h = height(0.1, 0.2, time) * (1.0 - 0.01 - 0.04) * 2.0;
            assert!(sheet.evaluate(&Point3f::new(0.1, 0.2, h), &env).is_solid());
            assert!(!sheet.evaluate(&Point3f::new(0.1, 0.2, h + 0.5), &env).is_solid());
        }
    }

    #[test]
    fn vanishes_outside_unit_disk() {
        let sheet = Interference::default();
        let env = EvalEnv::default();
        assert_eq!(sheet.evaluate(&Point3f::new(1.0, 0.5, 0.0), &env), Classification::Empty);
    }

    #[test]
    fn color_follows_position() {
        let sheet = Interference::default();
        let env = EvalEnv::default();
        let h = height(0.0, 0.0, 0.0) * 2.0;
        let c = sheet.evaluate(&Point3f::new(0.0, 0.0, h), &env).color();
        assert_eq!(c, Some(rgb(128.0, h * 128.0 + 128.0, 128.0)));
    }
}
