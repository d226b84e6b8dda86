//! Clamp

use super::Float;
use num_traits::Num;

/// Clamps a value x to [min, max].
///
/// * `x`   - The number to clamp.
/// * `min` - Minimum value.
/// * `max` - Maximum value.
pub fn clamp<T>(x: T, min: T, max: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Interface for clamping values.
pub trait Clamp {
    /// Clamps the values to the [0, 1] interval.
    fn clamp_unit(&self) -> Self;
}

impl Clamp for Float {
    /// Clamps the values to [0.0, 1.0].
    fn clamp_unit(&self) -> Self {
        clamp(*self, 0.0, 1.0)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_inside_and_outside() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(15, 0, 10), 10);
        assert_eq!((1.5 as Float).clamp_unit(), 1.0);
        assert_eq!((-0.5 as Float).clamp_unit(), 0.0);
    }
}
