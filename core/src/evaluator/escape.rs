//! Escape-time iteration

use super::Classification;
use crate::color::*;
use crate::geometry::*;
use crate::numeric::*;

/// Bounds of an escape-time recurrence.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EscapeParams {
    /// Maximum number of iterations.
    pub max_iterations: u32,

    /// Squared magnitude above which the iterate has escaped.
    pub max_distance: Float,
}

impl EscapeParams {
    /// Creates new escape-time bounds.
    ///
    /// * `max_iterations` - Maximum number of iterations.
    /// * `max_distance`   - Squared magnitude above which the iterate has escaped.
    pub const fn new(max_iterations: u32, max_distance: Float) -> Self {
        Self {
            max_iterations,
            max_distance,
        }
    }

    /// Returns `true` if the squared magnitude has escaped. Non-finite
    /// magnitudes count as escaped.
    ///
    /// * `d2` - Squared magnitude of the iterate.
    #[inline(always)]
    pub fn has_escaped(&self, d2: Float) -> bool {
        d2.is_nan() || d2 > self.max_distance
    }

    /// Iterates `z ← step(z)` from `z0` until the iterate escapes or the
    /// iteration bound is reached.
    ///
    /// * `z0`   - The starting iterate.
    /// * `step` - The recurrence. It is responsible for adding the input point.
    pub fn iterate<F>(&self, z0: Vector3f, mut step: F) -> EscapeTime
    where
        F: FnMut(&Vector3f) -> Vector3f,
    {
        let mut z = z0;
        for k in 1..=self.max_iterations {
            z = step(&z);
            if self.has_escaped(z.length_squared()) {
                return EscapeTime {
                    max_iterations: self.max_iterations,
                    escaped_at: Some(k),
                    z,
                };
            }
        }

        EscapeTime {
            max_iterations: self.max_iterations,
            escaped_at: None,
            z,
        }
    }
}

/// Result of an escape-time iteration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EscapeTime {
    /// The iteration bound used.
    pub max_iterations: u32,

    /// The 1-based iteration at which the iterate escaped, if it did.
    pub escaped_at: Option<u32>,

    /// The last iterate.
    pub z: Vector3f,
}

impl EscapeTime {
    /// Returns `true` if the iterate escaped.
    pub fn escaped(&self) -> bool {
        self.escaped_at.is_some()
    }

    /// Returns the escape index `max_iterations + 1 - k` where `k` is the
    /// iteration that escaped, or 0 if the iterate stayed bounded.
    pub fn remaining(&self) -> u32 {
        match self.escaped_at {
            Some(k) => self.max_iterations + 1 - k,
            None => 0,
        }
    }
}

/// How an escape-time result turns into a classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Solid with a fixed color iff the iterate stays bounded.
    Interior(Rgb),

    /// The escape index selects a palette entry; black entries are empty.
    Palette,
}

impl Shading {
    /// Returns the classification for an escape-time result.
    ///
    /// * `result`  - The escape-time result.
    /// * `palette` - The active palette.
    pub fn shade(&self, result: &EscapeTime, palette: &Palette) -> Classification {
        match self {
            Self::Interior(c) => {
                if result.escaped() {
                    Classification::Empty
                } else {
                    Classification::Solid(*c)
                }
            }
            Self::Palette => Classification::from(palette.entry(result.remaining() as usize)),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
