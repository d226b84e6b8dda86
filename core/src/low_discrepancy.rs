//! Low Discrepancy Sequences

use crate::numeric::*;
use std::ops::Range;

/// The generalized golden ratio φ₃ for three dimensions, the positive real
/// root of `x⁴ = x + 1`.
pub const PHI3: f64 = 1.220_744_084_605_759_5;

/// Per-axis increments `1/φ₃`, `1/φ₃²`, `1/φ₃³` of the R3 sequence.
pub const R3_ALPHA: [f64; 3] = [1.0 / PHI3, 1.0 / (PHI3 * PHI3), 1.0 / (PHI3 * PHI3 * PHI3)];

/// The additive recurrence (R3) sequence. Position `i` in the unit cube is
/// `frac((i + offset) · α)` per axis, so a position depends only on its index
/// and the sequence offset, never on the sample count or the thread that
/// computes it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct R3Sequence {
    /// Additive index offset applied to every sample.
    pub offset: u64,
}

impl R3Sequence {
    /// Creates a new sequence.
    ///
    /// * `offset` - Additive index offset applied to every sample.
    pub fn new(offset: u64) -> Self {
        Self { offset }
    }

    /// Returns the unit cube position for an index.
    ///
    /// * `index` - The sample index.
    pub fn sample(&self, index: u64) -> [f64; 3] {
        let n = index.wrapping_add(self.offset) as f64;
        [
            frac(n * R3_ALPHA[0]),
            frac(n * R3_ALPHA[1]),
            frac(n * R3_ALPHA[2]),
        ]
    }

    /// Returns an iterator over a range of indices from the highest index
    /// down to the lowest. Positions are updated incrementally by subtracting
    /// α with wraparound.
    ///
    /// * `range` - The index range.
    pub fn descending(&self, range: Range<u64>) -> R3Descending {
        let u = if range.is_empty() {
            [0.0; 3]
        } else {
            self.sample(range.end - 1)
        };

        R3Descending {
            start: range.start,
            end: range.end,
            u,
        }
    }
}

/// Iterator over an index range of the R3 sequence in descending order,
/// yielding `(index, position)` pairs.
#[derive(Clone, Debug)]
pub struct R3Descending {
    /// Lowest index of the range.
    start: u64,

    /// One past the next index to yield.
    end: u64,

    /// Position of index `end - 1`.
    u: [f64; 3],
}

impl Iterator for R3Descending {
    type Item = (u64, [f64; 3]);

    /// Returns the next index and position.
    fn next(&mut self) -> Option<Self::Item> {
        if self.end <= self.start {
            return None;
        }

        self.end -= 1;
        let item = (self.end, self.u);

        for (u, alpha) in self.u.iter_mut().zip(R3_ALPHA.iter()) {
            *u -= alpha;
            if *u < 0.0 {
                *u += 1.0;
            }
            if *u >= 1.0 {
                *u = 0.0;
            }
        }

        Some(item)
    }

    /// Returns the exact number of remaining items.
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end.saturating_sub(self.start) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for R3Descending {}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
