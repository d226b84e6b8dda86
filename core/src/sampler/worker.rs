//! Sampler worker

use crate::dither::*;
use crate::emitter::*;
use crate::evaluator::*;
use crate::frame::*;
use std::ops::Range;

/// Counters for one worker's share of a frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkerStats {
    /// Worker index.
    pub worker: usize,

    /// Number of samples evaluated.
    pub samples: u64,

    /// Number of solid points emitted.
    pub solid: u64,

    /// Number of batches handed to the sink.
    pub batches: u64,
}

/// Evaluates the samples of an index range from the highest index down and
/// emits the solid ones in batches.
///
/// * `snapshot` - The frame snapshot.
/// * `worker`   - Worker index.
/// * `range`    - The index range.
/// * `sink`     - Receives the batches.
pub fn run_worker(
    snapshot: &FrameSnapshot,
    worker: usize,
    range: Range<u64>,
    sink: &dyn BatchSink,
) -> WorkerStats {
    let mut stats = WorkerStats {
        worker,
        ..WorkerStats::default()
    };

    let evaluator = snapshot.evaluator.as_ref();
    let mut emitter = BatchEmitter::new(worker, snapshot.batch_capacity, sink);
    let mut ditherer = snapshot.gamma_lut.as_ref().map(Ditherer::new);

    for (_, u) in snapshot.sequence.descending(range) {
        stats.samples += 1;

        let (local, world) = snapshot.positions(&u);
        if let Classification::Solid(color) = evaluator.evaluate(&world, &snapshot.env) {
            let color = match ditherer.as_mut() {
                Some(d) => d.dither(color),
                None => color,
            };
            emitter.emit(local, color);
            stats.solid += 1;
        }
    }

    stats.batches = emitter.finish() as u64;
    stats
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
