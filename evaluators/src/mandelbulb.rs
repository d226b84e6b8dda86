//! Mandelbulb

use holo_core::color::*;
use holo_core::evaluator::*;
use holo_core::geometry::*;
use holo_core::numeric::*;

/// Below this squared distance from the pole axis the polynomial step uses
/// the pole result.
const POLE_EPSILON: f64 = 1e-20;

/// How the power 8 step is computed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MandelbulbForm {
    /// Spherical coordinates with the y-axis as the pole.
    Trigonometric,

    /// Closed-form polynomial expansion of the trigonometric form.
    Polynomial,
}

impl MandelbulbForm {
    /// Returns the next orbit point.
    ///
    /// * `z` - The current orbit point.
    /// * `c` - The constant term.
    #[inline]
    pub fn step(&self, z: &Vector3f, c: &Vector3f) -> Vector3f {
        match self {
            Self::Trigonometric => trigonometric_step(z, c),
            Self::Polynomial => polynomial_step(z, c),
        }
    }
}

/// The power 8 Mandelbulb.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mandelbulb {
    /// Evaluator name.
    name: &'static str,

    /// Step form.
    pub form: MandelbulbForm,

    /// Iteration limits.
    pub params: EscapeParams,

    /// Shading policy.
    pub shading: Shading,
}

impl Mandelbulb {
    /// Returns the polynomial variant shaded from the palette by escape index.
    pub fn palette() -> Self {
        Self {
            name: "mandelbulb",
            form: MandelbulbForm::Polynomial,
            params: EscapeParams::new(7, 20.0),
            shading: Shading::Palette,
        }
    }

    /// Returns the trigonometric variant that is solid wherever the orbit
    /// stays bounded.
    ///
    /// * `color` - Interior color.
    pub fn interior(color: Rgb) -> Self {
        Self {
            name: "mandelbulb-interior",
            form: MandelbulbForm::Trigonometric,
            params: EscapeParams::new(5, 20.0),
            shading: Shading::Interior(color),
        }
    }

    /// Returns a copy using another step form.
    ///
    /// * `form` - The step form.
    pub fn with_form(self, form: MandelbulbForm) -> Self {
        Self { form, ..self }
    }

    /// Runs the recurrence for a point.
    ///
    /// * `p` - The point.
    pub fn escape_time(&self, p: &Point3f) -> EscapeTime {
        let c = Vector3f::from(*p);
        let form = self.form;
        self.params.iterate(c, |z| form.step(z, &c))
    }
}

impl Evaluator for Mandelbulb {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, p: &Point3f, env: &EvalEnv) -> Classification {
        self.shading.shade(&self.escape_time(p), &env.palette)
    }
}

/// Returns `r⁸ (sin 8θ sin 8φ, cos 8θ, sin 8θ cos 8φ) + c` where θ is the
/// angle from the y-axis and φ the angle around it measured from z.
///
/// * `z` - The current orbit point.
/// * `c` - The constant term.
pub fn trigonometric_step(z: &Vector3f, c: &Vector3f) -> Vector3f {
    let r = z.length();
    if r == 0.0 {
        return *c;
    }

    let theta = 8.0 * z.xz().length().atan2(z.y);
    let phi = 8.0 * z.x.atan2(z.z);
    let r2 = r * r;
    let r4 = r2 * r2;
    let (st, ct) = theta.sin_cos();
    let (sp, cp) = phi.sin_cos();
    Vector3f::new(st * sp, ct, st * cp) * (r4 * r4) + *c
}

/// Returns the same result as `trigonometric_step` without trigonometric
/// functions. Evaluated in double precision since the terms grow as `r⁸`.
///
/// * `z` - The current orbit point.
/// * `c` - The constant term.
pub fn polynomial_step(z: &Vector3f, c: &Vector3f) -> Vector3f {
    let (x, y, z) = (z.x as f64, z.y as f64, z.z as f64);

    let x2 = x * x;
    let y2 = y * y;
    let z2 = z * z;
    let x4 = x2 * x2;
    let y4 = y2 * y2;
    let z4 = z2 * z2;

    let k3 = x2 + z2;
    let k4 = k3 - y2;
    let k1 = x4 + y4 + z4 - 6.0 * y2 * k3 + 2.0 * x2 * z2;
    let wy = k1 * k1 - 16.0 * y2 * k3 * k4 * k4;

    // On the pole axis the result is (0, y⁸, 0).
    let (wx, wz) = if k3 < POLE_EPSILON {
        (0.0, 0.0)
    } else {
        let k2 = k1 * k4 * y / (k3 * k3 * k3 * k3.sqrt());
        (
            64.0 * x * z * (x2 - z2) * (x4 - 6.0 * x2 * z2 + z4) * k2,
            -8.0 * (x4 * x4 - 28.0 * x4 * x2 * z2 + 70.0 * x4 * z4 - 28.0 * x2 * z2 * z4 + z4 * z4) * k2,
        )
    };

    Vector3f::new(wx as Float, wy as Float, wz as Float) + *c
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
