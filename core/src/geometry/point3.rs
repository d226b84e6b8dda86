//! 3-D Points

use super::Vector3;
use crate::numeric::*;
use num_traits::{Num, Zero};
use std::ops::{Add, Mul, Sub};

/// A 3-D point containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D point containing `Float` values.
pub type Point3f = Point3<Float>;

impl<T: Num> Point3<T> {
    /// Creates a new 3-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new 3-D point at the origin.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns true if all coordinates are finite.
    pub fn is_finite(&self) -> bool
    where
        T: num_traits::Float,
    {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns the distance to another point.
    ///
    /// * `other` - The other point.
    pub fn distance(&self, other: &Self) -> T
    where
        T: num_traits::Float,
    {
        (*self - *other).length()
    }

    /// Returns the square of the distance to another point.
    ///
    /// * `other` - The other point.
    pub fn distance_squared(&self, other: &Self) -> T
    where
        T: Copy,
    {
        (*self - *other).length_squared()
    }
}

impl<T: Num> Add<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;

    /// Offsets the point by the given vector.
    ///
    /// * `other` -  The vector to add.
    fn add(self, other: Vector3<T>) -> Self::Output {
        Self::Output::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Num> Sub for Point3<T> {
    type Output = Vector3<T>;

    /// Returns the vector from the given point to this one.
    ///
    /// * `other` -  The other point.
    fn sub(self, other: Self) -> Self::Output {
        Self::Output::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num> Sub<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;

    /// Offsets the point by the negated vector.
    ///
    /// * `other` -  The vector to subtract.
    fn sub(self, other: Vector3<T>) -> Self::Output {
        Self::Output::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num + Copy> Mul<T> for Point3<T> {
    type Output = Point3<T>;

    /// Scale the point's coordinates.
    ///
    /// * `f` -  The scaling factor.
    fn mul(self, f: T) -> Self::Output {
        Self::Output::new(f * self.x, f * self.y, f * self.z)
    }
}

impl<T> From<Vector3<T>> for Point3<T> {
    /// Convert a 3-D vector to a 3-D point.
    ///
    /// * `v` -  3-D vector.
    fn from(v: Vector3<T>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
