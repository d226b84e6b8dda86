//! Evaluators

mod classification;
mod escape;
mod orbit_trap;
mod registry;
mod selection;

use crate::color::*;
use crate::geometry::*;
use crate::numeric::*;
use std::sync::Arc;

// Re-export
pub use classification::*;
pub use escape::*;
pub use orbit_trap::*;
pub use registry::*;
pub use selection::*;

/// Per-frame inputs shared by every evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EvalEnv {
    /// Animation time in seconds. Drives the procedural evaluators.
    pub time: Float,

    /// The active palette. Drives the palette shaded fractals.
    pub palette: Palette,
}

impl EvalEnv {
    /// Creates a new evaluation environment.
    ///
    /// * `time`    - Animation time in seconds.
    /// * `palette` - The active palette.
    pub fn new(time: Float, palette: Palette) -> Self {
        Self { time, palette }
    }
}

impl Default for EvalEnv {
    /// Returns an environment at time 0 with the first palette.
    fn default() -> Self {
        Self::new(0.0, Palette::default())
    }
}

/// Surface evaluator interface. Implementations are pure, total functions of
/// the world-space point and the environment; they never fail and every
/// loop they run is bounded.
pub trait Evaluator: Send + Sync {
    /// Returns the evaluator name. Usually these are behind `ArcEvaluator` and
    /// harder to debug. So this will be helpful.
    fn name(&self) -> &'static str;

    /// Classifies a world-space point.
    ///
    /// * `p`   - The point.
    /// * `env` - The evaluation environment.
    fn evaluate(&self, p: &Point3f, env: &EvalEnv) -> Classification;
}

/// Atomic reference counted `Evaluator`.
pub type ArcEvaluator = Arc<dyn Evaluator>;
