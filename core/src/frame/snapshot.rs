//! Frame snapshot

use super::{CameraFrame, Volume, WorldTransform};
use crate::dither::*;
use crate::evaluator::*;
use crate::geometry::*;
use crate::low_discrepancy::*;

/// Default number of points per batch.
pub const DEFAULT_BATCH_CAPACITY: usize = 4096;

/// Immutable per-frame copy of everything the workers read. Workers share it
/// by reference and never mutate it.
#[derive(Clone)]
pub struct FrameSnapshot {
    /// The sampled volume.
    pub volume: Volume,

    /// Local to world mapping with the basis already scaled.
    pub transform: WorldTransform,

    /// The selected evaluator.
    pub evaluator: ArcEvaluator,

    /// Evaluation environment.
    pub env: EvalEnv,

    /// Number of samples `N` for the frame.
    pub sample_count: u64,

    /// The sample sequence.
    pub sequence: R3Sequence,

    /// Points per batch, at least 1.
    pub batch_capacity: usize,

    /// Gamma table for dithering; `None` disables dithering.
    pub gamma_lut: Option<GammaLut>,
}

impl FrameSnapshot {
    /// Create a new frame snapshot.
    ///
    /// * `volume`         - The sampled volume.
    /// * `camera`         - The camera frame.
    /// * `evaluator`      - The selected evaluator.
    /// * `env`            - Evaluation environment.
    /// * `sample_count`   - Number of samples for the frame.
    /// * `sequence`       - The sample sequence.
    /// * `batch_capacity` - Points per batch; clamped to at least 1.
    /// * `gamma_lut`      - Gamma table for dithering; `None` disables it.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        volume: Volume,
        camera: &CameraFrame,
        evaluator: ArcEvaluator,
        env: EvalEnv,
        sample_count: u64,
        sequence: R3Sequence,
        batch_capacity: usize,
        gamma_lut: Option<GammaLut>,
    ) -> Self {
        Self {
            volume,
            transform: camera.world_transform(),
            evaluator,
            env,
            sample_count,
            sequence,
            batch_capacity: batch_capacity.max(1),
            gamma_lut,
        }
    }

    /// Returns the local and world position of a unit cube sample.
    ///
    /// * `u` - The unit cube position.
    #[inline]
    pub fn positions(&self, u: &[f64; 3]) -> (Point3f, Point3f) {
        let local = self.volume.to_local(u);
        (local, self.transform.to_world(&local))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::BasisPair;
    use crate::numeric::*;
    use std::sync::Arc;

    struct Nothing;

    impl Evaluator for Nothing {
        fn name(&self) -> &'static str {
            "nothing"
        }

        fn evaluate(&self, _p: &Point3f, _env: &EvalEnv) -> Classification {
            Classification::Empty
        }
    }

    #[test]
    fn batch_capacity_is_at_least_one() {
        let s = FrameSnapshot::new(
            Volume::default(),
            &CameraFrame::default(),
            Arc::new(Nothing),
            EvalEnv::default(),
            10,
            R3Sequence::default(),
            0,
            None,
        );
        assert_eq!(s.batch_capacity, 1);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_camera_changes() {
        let mut camera = CameraFrame::default();
        let s = FrameSnapshot::new(
            Volume::default(),
            &camera,
            Arc::new(Nothing),
            EvalEnv::default(),
            10,
            R3Sequence::default(),
            DEFAULT_BATCH_CAPACITY,
            None,
        );
        camera.rotate(BasisPair::RightDown, PI / 3.0);
        camera.scale_by(4.0);

        let (local, world) = s.positions(&[0.75, 0.5, 0.5]);
        assert_eq!(local, Point3f::new(0.5, 0.0, 0.0));
        assert_eq!(world, local);
    }
}
