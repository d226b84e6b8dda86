//! Quaternions

use super::common::*;
use super::Vector3f;
use crate::numeric::*;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A quaternion
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion {
    /// The `x`, `y`, `z` components represented as a vector.
    pub v: Vector3f,

    /// The real component `w`.
    pub w: Float,
}

impl Quaternion {
    /// Create a new quaternion.
    ///
    /// * `v` - The `x`, `y`, `z` components represented as a vector.
    /// * `w` - The real component `w`.
    pub fn new(v: Vector3f, w: Float) -> Self {
        Self { v, w }
    }

    /// Create a new quaternion from its real part followed by the three
    /// imaginary parts.
    ///
    /// * `w` - The real component.
    /// * `x` - The `i` component.
    /// * `y` - The `j` component.
    /// * `z` - The `k` component.
    pub fn from_components(w: Float, x: Float, y: Float, z: Float) -> Self {
        Self::new(Vector3f::new(x, y, z), w)
    }

    /// Returns the square of the length of the quaternion which is the
    /// inner product with itself.
    pub fn length_squared(&self) -> Float {
        self.dot(self)
    }

    /// Returns the length of the quaternion which is square root of the inner
    /// product with itself.
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }

    /// Returns the square of the quaternion.
    pub fn square(&self) -> Self {
        *self * *self
    }
}

impl Default for Quaternion {
    /// Returns the default quaternion [0, 0, 0, 1].
    fn default() -> Self {
        Self {
            v: Vector3f::zero(),
            w: 1.0,
        }
    }
}

impl fmt::Display for Quaternion {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.v.x, self.v.y, self.v.z, self.w)
    }
}

impl Dot<Quaternion> for Quaternion {
    type Output = Float;

    /// Returns the inner product with another quaternion.
    ///
    /// * `other` - The other quaternion.
    fn dot(&self, other: &Quaternion) -> Float {
        self.v.dot(&other.v) + self.w * other.w
    }
}

impl Add for Quaternion {
    type Output = Self;

    /// Adds the given quaternion and returns the result.
    ///
    /// * `other` - The quaternion to add.
    fn add(self, other: Self) -> Self::Output {
        Self::new(self.v + other.v, self.w + other.w)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    /// Subtracts the given quaternion and returns the result.
    ///
    /// * `other` - The quaternion to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.v - other.v, self.w - other.w)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Returns the Hamilton product with another quaternion.
    ///
    /// * `other` - The right hand side quaternion.
    fn mul(self, other: Self) -> Self::Output {
        Self::new(
            other.v * self.w + self.v * other.w + self.v.cross(&other.v),
            self.w * other.w - self.v.dot(&other.v),
        )
    }
}

impl Mul<Float> for Quaternion {
    type Output = Self;

    /// Scales the quaternion by a factor.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: Float) -> Self::Output {
        Self::new(self.v * f, self.w * f)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    /// Negates all components.
    fn neg(self) -> Self::Output {
        Self::new(-self.v, -self.w)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
