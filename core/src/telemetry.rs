//! Frame telemetry

use crate::numeric::*;
use std::fmt;

/// Diagnostics reported after every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameTelemetry {
    /// Frame number starting at 0.
    pub frame: u64,

    /// Target volume rate.
    pub target_rate: Float,

    /// Measured volume rate from the last frame time.
    pub measured_rate: Float,

    /// Sample count used for the frame.
    pub samples: u64,

    /// Index of the evaluator.
    pub evaluator_index: usize,

    /// Name of the evaluator.
    pub evaluator_name: &'static str,

    /// Index of the palette.
    pub palette_index: usize,

    /// Number of solid points emitted.
    pub solid_points: u64,

    /// Number of batches emitted.
    pub batches: u64,
}

impl fmt::Display for FrameTelemetry {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame {}: target vps {:.1}, actual vps {:.1}, dots {}, evaluator {} ({}), palette {}, solid {}, batches {}",
            self.frame,
            self.target_rate,
            self.measured_rate,
            self.samples,
            self.evaluator_index,
            self.evaluator_name,
            self.palette_index,
            self.solid_points,
            self.batches
        )
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
