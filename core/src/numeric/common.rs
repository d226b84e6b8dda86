//! Common

use num_traits::Num;
use std::ops::Neg;

/// Use 32-bit precision for floating point numbers.
pub type Float = f32;

/// PI (π)
pub const PI: Float = std::f32::consts::PI;

/// Returns the absolute value of a number.
///
/// * `n` - The number.
#[inline(always)]
pub fn abs<T>(n: T) -> T
where
    T: Num + Neg<Output = T> + PartialOrd + Copy,
{
    if n < T::zero() {
        -n
    } else {
        n
    }
}

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn min<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn max<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a > b {
        a
    } else {
        b
    }
}

/// Returns the fractional part `v - floor(v)` in [0, 1).
///
/// * `v` - The number.
#[inline(always)]
pub fn frac(v: f64) -> f64 {
    let f = v - v.floor();
    // `v - floor(v)` can round up to exactly 1 for tiny negative inputs.
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn frac_of_integers_is_zero() {
        assert_eq!(frac(0.0), 0.0);
        assert_eq!(frac(7.0), 0.0);
        assert_eq!(frac(-3.0), 0.0);
    }

    proptest! {
        #[test]
        fn frac_is_in_unit_interval(v in -1.0e6..1.0e6f64) {
            let f = frac(v);
            prop_assert!((0.0..1.0).contains(&f));
        }

        #[test]
        fn abs_min_max_i32(a in -100..100i32, b in -100..100i32) {
            prop_assert_eq!(abs(a), a.abs());
            prop_assert_eq!(min(a, b), a.min(b));
            prop_assert_eq!(max(a, b), a.max(b));
        }
    }
}
