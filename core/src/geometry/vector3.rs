//! 3-D Vectors

use super::common::*;
use super::{Point3, Vector2};
use crate::numeric::*;
use num_traits::{Num, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 3-D vector containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D vector containing `Float` values.
pub type Vector3f = Vector3<Float>;

impl<T: Num> Vector3<T> {
    /// Creates a new 3-D vector.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new 3-D zero vector.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns true if either coordinate is NaN.
    pub fn has_nans(&self) -> bool
    where
        T: num_traits::Float,
    {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns the square of the vector's length.
    pub fn length_squared(&self) -> T
    where
        T: Copy,
    {
        self.x * self.x + self.y * self.y + self.z * self.z
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
        Self::new(abs(self.x), abs(self.y), abs(self.z))
    }

    /// Returns the cross product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn cross(&self, other: &Self) -> Self
    where
        T: Copy,
    {
        Self::new(
            (self.y * other.z) - (self.z * other.y),
            (self.z * other.x) - (self.x * other.z),
            (self.x * other.y) - (self.y * other.x),
        )
    }

    /// Returns the largest coordinate value.
    pub fn max_component(&self) -> T
    where
        T: PartialOrd + Copy,
    {
        max(self.x, max(self.y, self.z))
    }

    /// Return the component-wise minimum coordinate values with another vector.
    ///
    /// * `other` - The other vector.
    pub fn min(&self, other: &Self) -> Self
    where
        T: PartialOrd + Copy,
    {
        Self::new(
            min(self.x, other.x),
            min(self.y, other.y),
            min(self.z, other.z),
        )
    }

    /// Return the component-wise maximum coordinate values with another vector.
    ///
    /// * `other` - The other vector.
    pub fn max(&self, other: &Self) -> Self
    where
        T: PartialOrd + Copy,
    {
        Self::new(
            max(self.x, other.x),
            max(self.y, other.y),
            max(self.z, other.z),
        )
    }

    /// Returns the projection onto the XZ plane.
    pub fn xz(&self) -> Vector2<T>
    where
        T: Copy,
    {
        Vector2::new(self.x, self.z)
    }
}

impl<T: Num + Copy> Dot<Vector3<T>> for Vector3<T> {
    type Output = T;

    /// Returns the dot product with another vector.
    ///
    /// * `other` - The other vector.
    fn dot(&self, other: &Vector3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T: Num> Add for Vector3<T> {
    type Output = Self;

    /// Adds the given vector and returns the result.
    ///
    /// * `other` -  The vector to add.
    fn add(self, other: Self) -> Self::Output {
        Self::Output::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Num> Sub for Vector3<T> {
    type Output = Self;

    /// Subtracts the given vector and returns the result.
    ///
    /// * `other` -  The vector to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::Output::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num + Copy> Mul<T> for Vector3<T> {
    type Output = Vector3<T>;

    /// Scale the vector.
    ///
    /// * `f` -  The scaling factor.
    fn mul(self, f: T) -> Self::Output {
        Self::Output::new(f * self.x, f * self.y, f * self.z)
    }
}

macro_rules! premul {
    ($t: ty) => {
        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;
            /// Scale the vector.
            ///
            /// * `v` -  The vector.
            fn mul(self, v: Vector3<$t>) -> Vector3<$t> {
                Vector3::<$t>::new(self * v.x, self * v.y, self * v.z)
            }
        }
    };
}

premul!(f32);
premul!(f64);

impl<T: Num + Copy> Div<T> for Vector3<T> {
    type Output = Self;

    /// Scale the vector by 1/f.
    ///
    /// * `f` -  The scaling factor.
    fn div(self, f: T) -> Self::Output {
        debug_assert!(!f.is_zero());
        Self::Output::new(self.x / f, self.y / f, self.z / f)
    }
}

impl<T: Num + Neg<Output = T>> Neg for Vector3<T> {
    type Output = Self;

    /// Flip the vector's direction (scale by -1).
    fn neg(self) -> Self::Output {
        Self::Output::new(-self.x, -self.y, -self.z)
    }
}

impl<T> From<Point3<T>> for Vector3<T> {
    /// Convert a 3-D point to a 3-D vector.
    ///
    /// * `p` -  3-D point.
    fn from(p: Point3<T>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
