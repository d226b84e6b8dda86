//! Sampling volume

use crate::geometry::*;
use crate::numeric::*;

/// Smallest allowed half-extent.
pub const MIN_HALF_EXTENT: Float = 1e-3;

/// An axis-aligned box symmetric about the origin in the display's local
/// frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Volume {
    /// Half-extents along each axis.
    half_extents: Vector3f,
}

impl Volume {
    /// Creates a new volume. Non-finite or too small half-extents are clamped
    /// to `MIN_HALF_EXTENT`.
    ///
    /// * `half_extents` - Half-extents along each axis.
    pub fn new(half_extents: Vector3f) -> Self {
        let fix = |v: Float, axis: &str| {
            if v.is_finite() && v >= MIN_HALF_EXTENT {
                v
            } else {
                warn!("Invalid half-extent {} for {} axis; using {}", v, axis, MIN_HALF_EXTENT);
                MIN_HALF_EXTENT
            }
        };

        Self {
            half_extents: Vector3f::new(
                fix(half_extents.x, "x"),
                fix(half_extents.y, "y"),
                fix(half_extents.z, "z"),
            ),
        }
    }

    /// Returns the half-extents.
    pub fn half_extents(&self) -> Vector3f {
        self.half_extents
    }

    /// Maps a unit cube position to the local frame using
    /// `local = (2u - 1) ⊙ half_extents`.
    ///
    /// * `u` - The unit cube position.
    #[inline]
    pub fn to_local(&self, u: &[f64; 3]) -> Point3f {
        let h = &self.half_extents;
        Point3f::new(
            u[0] as Float * h.x * 2.0 - h.x,
            u[1] as Float * h.y * 2.0 - h.y,
            u[2] as Float * h.z * 2.0 - h.z,
        )
    }

    /// Returns `true` if a local point lies inside the closed volume.
    ///
    /// * `p` - The local point.
    pub fn contains(&self, p: &Point3f) -> bool {
        let h = &self.half_extents;
        p.x.abs() <= h.x && p.y.abs() <= h.y && p.z.abs() <= h.z
    }
}

impl Default for Volume {
    /// Returns a volume with half-extents (1, 1, 0.4).
    fn default() -> Self {
        Self::new(Vector3f::new(1.0, 1.0, 0.4))
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
    fn invalid_extents_are_clamped() {
        let v = Volume::new(Vector3f::new(Float::NAN, -1.0, 0.0));
        assert_eq!(v.half_extents(), Vector3f::new(MIN_HALF_EXTENT, MIN_HALF_EXTENT, MIN_HALF_EXTENT));

        let v = Volume::new(Vector3f::new(2.0, Float::INFINITY, 0.5));
        assert_eq!(v.half_extents(), Vector3f::new(2.0, MIN_HALF_EXTENT, 0.5));
    }

    #[test]
    fn corners_map_to_box_faces() {
        let v = Volume::new(Vector3f::new(1.0, 2.0, 0.5));
        assert_eq!(v.to_local(&[0.0, 0.0, 0.0]), Point3f::new(-1.0, -2.0, -0.5));
        assert_eq!(v.to_local(&[0.5, 0.5, 0.5]), Point3f::new(0.0, 0.0, 0.0));
        assert_eq!(v.to_local(&[1.0, 1.0, 1.0]), Point3f::new(1.0, 2.0, 0.5));
    }

    proptest! {
        #[test]
        fn unit_cube_maps_inside(x in 0.0..1.0f64, y in 0.0..1.0f64, z in 0.0..1.0f64) {
            let v = Volume::default();
            prop_assert!(v.contains(&v.to_local(&[x, y, z])));
        }
    }
}
