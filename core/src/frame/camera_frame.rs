//! Camera frame

use crate::geometry::*;
use crate::numeric::*;

/// A pair of basis vectors to rotate within their common plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BasisPair {
    /// Right and down (roll).
    RightDown,

    /// Down and forward (pitch).
    DownForward,

    /// Forward and right (yaw).
    ForwardRight,
}

/// Position, orientation and uniform scale of the sampled volume in world
/// space. The basis need not be orthonormal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraFrame {
    /// Origin.
    pub pp: Point3f,

    /// Right basis vector.
    pub pr: Vector3f,

    /// Down basis vector.
    pub pd: Vector3f,

    /// Forward basis vector.
    pub pf: Vector3f,

    /// Uniform scale applied to the basis.
    pub scale: Float,
}

impl CameraFrame {
    /// Resets position, orientation and scale to identity.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves the origin along the frame's own basis. The offset is scaled
    /// by `scale`.
    ///
    /// * `d` - Offset in basis coordinates.
    pub fn translate(&mut self, d: &Vector3f) {
        self.pp = self.pp + (self.pr * d.x + self.pd * d.y + self.pf * d.z) * self.scale;
    }

    /// Rotates a pair of basis vectors around their common plane.
    ///
    /// * `pair`  - The basis vectors to rotate.
    /// * `angle` - The angle in radians.
    pub fn rotate(&mut self, pair: BasisPair, angle: Float) {
        let (a, b) = match pair {
            BasisPair::RightDown => (&mut self.pr, &mut self.pd),
            BasisPair::DownForward => (&mut self.pd, &mut self.pf),
            BasisPair::ForwardRight => (&mut self.pf, &mut self.pr),
        };
        let (s, c) = angle.sin_cos();
        let (oa, ob) = (*a, *b);
        *a = oa * c + ob * s;
        *b = ob * c - oa * s;
    }

    /// Multiplies the scale by a factor. Non-finite or non-positive factors
    /// are ignored.
    ///
    /// * `factor` - The scale factor.
    pub fn scale_by(&mut self, factor: Float) {
        let scale = self.scale * factor;
        if factor > 0.0 && scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        } else {
            warn!("Ignoring scale factor {}", factor);
        }
    }

    /// Returns the world transform with the basis pre-multiplied by `scale`.
    pub fn world_transform(&self) -> WorldTransform {
        WorldTransform {
            origin: self.pp,
            right: self.pr * self.scale,
            down: self.pd * self.scale,
            forward: self.pf * self.scale,
        }
    }
}

impl Default for CameraFrame {
    /// Returns the identity frame at the origin with unit scale.
    fn default() -> Self {
        Self {
            pp: Point3f::zero(),
            pr: Vector3f::new(1.0, 0.0, 0.0),
            pd: Vector3f::new(0.0, 1.0, 0.0),
            pf: Vector3f::new(0.0, 0.0, 1.0),
            scale: 1.0,
        }
    }
}

/// Maps local volume points to world space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldTransform {
    /// World origin.
    pub origin: Point3f,

    /// Scaled right basis vector.
    pub right: Vector3f,

    /// Scaled down basis vector.
    pub down: Vector3f,

    /// Scaled forward basis vector.
    pub forward: Vector3f,
}

impl WorldTransform {
    /// Returns `local.x·right + local.y·down + local.z·forward + origin`.
    ///
    /// * `local` - The local point.
    #[inline]
    pub fn to_world(&self, local: &Point3f) -> Point3f {
        self.origin + self.right * local.x + self.down * local.y + self.forward * local.z
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
