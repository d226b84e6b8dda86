//! Frame dispatcher

use super::{partition, run_worker, WorkerStats};
use crate::emitter::*;
use crate::error::*;
use crate::frame::*;
use std::any::Any;
use std::thread;
use std::time::{Duration, Instant};

/// Counters for a whole frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of workers that ran.
    pub workers: usize,

    /// Number of samples evaluated.
    pub samples: u64,

    /// Number of solid points emitted.
    pub solid: u64,

    /// Number of batches handed to the sink.
    pub batches: u64,

    /// Wall clock time of the parallel section.
    pub elapsed: Duration,
}

impl FrameStats {
    /// Adds a worker's counters.
    ///
    /// * `w` - The worker counters.
    fn add(&mut self, w: &WorkerStats) {
        self.workers += 1;
        self.samples += w.samples;
        self.solid += w.solid;
        self.batches += w.batches;
    }
}

/// Runs a frame as a fork-join over named scoped worker threads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dispatcher {
    /// Number of workers.
    workers: usize,
}

impl Dispatcher {
    /// Create a new dispatcher.
    ///
    /// * `workers` - Number of workers; clamped to at least 1.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Returns the number of workers.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Samples a frame. Each worker gets a contiguous range of `[0, N)`;
    /// workers with an empty range are not spawned. Returns only after every
    /// spawned worker has been joined.
    ///
    /// * `snapshot` - The frame snapshot.
    /// * `sink`     - Receives the batches.
    pub fn run(&self, snapshot: &FrameSnapshot, sink: &dyn BatchSink) -> Result<FrameStats, FrameError> {
        let start = Instant::now();
        let ranges = partition(snapshot.sample_count, self.workers);

        let mut result = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(ranges.len());
            let mut error = None;

            for (worker, range) in ranges.into_iter().enumerate() {
                if range.is_empty() {
                    continue;
                }

                let spawned = thread::Builder::new()
                    .name(format!("sampler-{}", worker))
                    .spawn_scoped(scope, move || run_worker(snapshot, worker, range, sink));

                match spawned {
                    Ok(handle) => handles.push((worker, handle)),
                    Err(e) => {
                        error = Some(FrameError::Spawn {
                            worker,
                            message: e.to_string(),
                        });
                        break;
                    }
                }
            }

            // Join everything that was spawned, even after a failure.
            let mut stats = FrameStats::default();
            for (worker, handle) in handles {
                match handle.join() {
                    Ok(w) => {
                        debug!(
                            "Worker {}: {} samples, {} solid, {} batches",
                            w.worker, w.samples, w.solid, w.batches
                        );
                        stats.add(&w);
                    }
                    Err(payload) => {
                        error.get_or_insert(FrameError::WorkerPanicked {
                            worker,
                            message: panic_message(payload.as_ref()),
                        });
                    }
                }
            }

            match error {
                Some(e) => Err(e),
                None => Ok(stats),
            }
        });

        if let Ok(stats) = result.as_mut() {
            stats.elapsed = start.elapsed();
        }
        result
    }
}

/// Returns the message of a panic payload.
///
/// * `payload` - The panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("unknown panic payload")
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
