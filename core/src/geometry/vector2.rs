//! 2-D Vectors

use crate::numeric::*;
use num_traits::{Num, Zero};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2-D vector containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,
}

/// 2-D vector containing `Float` values.
pub type Vector2f = Vector2<Float>;

impl<T: Num> Vector2<T> {
    /// Creates a new 2-D vector.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a new 2-D zero vector.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero())
    }

    /// Returns the square of the vector's length.
    pub fn length_squared(&self) -> T
    where
        T: Copy,
    {
        self.x * self.x + self.y * self.y
    }

    /// Returns the vector's length.
    pub fn length(&self) -> T
    where
        T: num_traits::Float,
    {
        self.length_squared().sqrt()
    }

    /// Returns a new vector containing absolute values of the components.
    pub fn abs(&self) -> Self
    where
        T: Neg<Output = T> + PartialOrd + Copy,
    {
        Self::new(abs(self.x), abs(self.y))
    }
}

impl<T: Num> Add for Vector2<T> {
    type Output = Self;

    /// Adds the given vector and returns the result.
    ///
    /// * `other` -  The vector to add.
    fn add(self, other: Self) -> Self::Output {
        Self::Output::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Num> Sub for Vector2<T> {
    type Output = Self;

    /// Subtracts the given vector and returns the result.
    ///
    /// * `other` -  The vector to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::Output::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Num + Copy> Mul<T> for Vector2<T> {
    type Output = Self;

    /// Scale the vector.
    ///
    /// * `f` -  The scaling factor.
    fn mul(self, f: T) -> Self::Output {
        Self::Output::new(f * self.x, f * self.y)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
#[macro_use]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_vector() {
        assert!(Vector2::new(0, 0) == Vector2::zero());
        assert!(Vector2::new(0.0, 0.0) == Vector2::zero());
    }

    #[test]
    fn length_of_3_4_is_5() {
        assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector2::new(-3.0, -4.0).abs(), Vector2::new(3.0, 4.0));
    }

    prop_vector2!(vector2_f32, f32, -100.0..100.0f32, -100.0..100.0f32);

    proptest! {
        #[test]
        fn length_squared_f32(v in vector2_f32()) {
            prop_assert_eq!(v.length_squared(), v.x * v.x + v.y * v.y);
        }

        #[test]
        fn add_sub_f32(v1 in vector2_f32(), v2 in vector2_f32()) {
            prop_assert_eq!(v1 + v2, Vector2::new(v1.x + v2.x, v1.y + v2.y));
            prop_assert_eq!(v1 - v2, Vector2::new(v1.x - v2.x, v1.y - v2.y));
        }
    }
}
