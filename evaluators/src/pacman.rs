//! Pac-man

use holo_core::color::*;
use holo_core::evaluator::*;
use holo_core::geometry::*;
use holo_core::numeric::*;

/// Dot color.
const DOT: Rgb = Rgb::new(0xc0ffff);

/// Inner mouth color.
const MOUTH: Rgb = Rgb::new(0x606030);

/// Body color.
const BODY: Rgb = Rgb::new(0xc0c060);

/// An animated pac-man chasing eight dots around a ring.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pacman;

/// Time dependent state shared by all points of a frame.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Pose {
    /// Cosine of the ring angle.
    cos: Float,

    /// Sine of the ring angle.
    sin: Float,

    /// Mouth opening in [0, 1].
    mouth: Float,
}

impl Pose {
    /// Returns the pose at a time.
    ///
    /// * `time` - Animation time in seconds.
    fn at(time: Float) -> Self {
        let t = time * 0.7;
        let (sin, cos) = t.sin_cos();
        let t = (t + 0.3) * 16.0;
        Self {
            cos,
            sin,
            mouth: 0.5 - 0.5 * (t + t.cos() * 0.5).sin(),
        }
    }
}

/// Returns the squared distance to the nearest of eight dots on a circle of
/// radius 1/√2 in the xy-plane, using the eightfold symmetry.
///
/// * `x` - X-coordinate in the rotating frame.
/// * `y` - Y-coordinate in the rotating frame.
/// * `z` - Z-coordinate.
fn dot_distance_squared(x: Float, y: Float, z: Float) -> Float {
    let (ax, ay) = (abs(x), abs(y));
    let fx = max(ax, ay) - (PI / 8.0).cos() / (2.0 as Float).sqrt();
    let fy = min(ax, ay) - (PI / 8.0).sin() / (2.0 as Float).sqrt();
    fx * fx + fy * fy + z * z
}

impl Evaluator for Pacman {
    fn name(&self) -> &'static str {
        "pacman"
    }

    fn evaluate(&self, p: &Point3f, env: &EvalEnv) -> Classification {
        if abs(p.z) > 0.34 || abs(p.x * p.x + p.y * p.y - 0.554) > 0.45 {
            return Classification::Empty;
        }

        let pose = Pose::at(env.time);
        let (c, s) = (pose.cos, pose.sin);

        // Dots rotate one way.
        let dx = c * p.x + s * p.y;
        let dy = c * p.y - s * p.x;
        if dot_distance_squared(dx, dy, p.z) < 0.06 * 0.06 {
            return Classification::from(DOT);
        }

        // Pac-man rotates the other way, scaled up 3 times.
        let x = (c * p.x - s * p.y) * 3.0 + 2.0;
        let y = (c * p.y + s * p.x) * 3.0;
        let z = p.z * 3.0;

        let eye = Vector3f::new(abs(x) - 0.4, y - 0.5, z + 0.7);
        if eye.length_squared() < 0.24 * 0.24 {
            let pupil = Vector3f::new(abs(x + c * 0.2) - 0.4, y - 0.6 - abs(s) * 0.2, z + 0.8);
            return if pupil.length_squared() < 0.15 * 0.15 {
                // Black pupils read as holes in the eye.
                Classification::Empty
            } else {
                Classification::Solid(Rgb::WHITE)
            };
        }

        let d = x * x + y * y + z * z;
        if d > 1.0 || abs(z - 0.1) < y * pose.mouth {
            return Classification::Empty;
        }

        if d < 0.9 * 0.9 {
            Classification::from(MOUTH)
        } else {
            Classification::from(BODY)
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
