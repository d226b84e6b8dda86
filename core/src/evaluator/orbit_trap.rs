//! Orbit traps

use crate::geometry::*;
use crate::numeric::*;

/// A reference shape used to shade escape-time fractals by how close the
/// orbit comes to it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OrbitTrap {
    /// A reference point.
    Point(Point3f),

    /// A sphere surface.
    Sphere {
        /// Center of the sphere.
        center: Point3f,

        /// Radius of the sphere.
        radius: Float,
    },

    /// A plane `dot(z, normal) = offset`. The normal is expected to be unit
    /// length.
    Plane {
        /// Plane normal.
        normal: Vector3f,

        /// Signed distance of the plane from the origin.
        offset: Float,
    },
}

impl OrbitTrap {
    /// Returns the distance from an iterate to the trap.
    ///
    /// * `z` - The iterate.
    pub fn distance(&self, z: &Vector3f) -> Float {
        let p = Point3f::from(*z);
        match self {
            Self::Point(c) => p.distance(c),
            Self::Sphere { center, radius } => abs(p.distance(center) - radius),
            Self::Plane { normal, offset } => abs(z.dot(normal) - offset),
        }
    }

    /// Returns a tracker for the minimum distance across an orbit.
    pub fn tracker(&self) -> OrbitTrapTracker {
        OrbitTrapTracker {
            trap: *self,
            min_distance: Float::INFINITY,
        }
    }
}

/// Records the minimum distance to an orbit trap across iterations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrbitTrapTracker {
    /// The trap.
    pub trap: OrbitTrap,

    /// Minimum distance seen so far. Infinite until the first update.
    pub min_distance: Float,
}

impl OrbitTrapTracker {
    /// Records an iterate. NaN distances are ignored.
    ///
    /// * `z` - The iterate.
    pub fn update(&mut self, z: &Vector3f) {
        let d = self.trap.distance(z);
        if d < self.min_distance {
            self.min_distance = d;
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
