//! Batch sinks

use super::PointVertex;
use crossbeam_channel::Sender;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Receives point batches from concurrently running workers. A call hands
/// over the batch synchronously; the slice is only valid for the duration
/// of the call.
pub trait BatchSink: Sync {
    /// Consumes a batch.
    ///
    /// * `worker` - The worker that produced the batch.
    /// * `points` - The points in emission order.
    fn consume(&self, worker: usize, points: &[PointVertex]);
}

/// Counts points and batches without storing them.
#[derive(Debug, Default)]
pub struct CountingSink {
    points: AtomicU64,
    batches: AtomicU64,
}

impl CountingSink {
    /// Returns the number of points received.
    pub fn points(&self) -> u64 {
        self.points.load(Ordering::Relaxed)
    }

    /// Returns the number of batches received.
    pub fn batches(&self) -> u64 {
        self.batches.load(Ordering::Relaxed)
    }

    /// Resets the counters.
    pub fn reset(&self) {
        self.points.store(0, Ordering::Relaxed);
        self.batches.store(0, Ordering::Relaxed);
    }
}

impl BatchSink for CountingSink {
    /// Counts a batch.
    ///
    /// * `worker` - The worker that produced the batch.
    /// * `points` - The points in emission order.
    fn consume(&self, _worker: usize, points: &[PointVertex]) {
        self.points.fetch_add(points.len() as u64, Ordering::Relaxed);
        self.batches.fetch_add(1, Ordering::Relaxed);
    }
}

/// Collects every point into one cloud. Batches from different workers
/// interleave in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    points: Mutex<Vec<PointVertex>>,
}

impl CollectingSink {
    /// Removes and returns the collected points.
    pub fn take(&self) -> Vec<PointVertex> {
        let mut points = self.points.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *points)
    }

    /// Returns the number of collected points.
    pub fn len(&self) -> usize {
        self.points.lock().map_or_else(|e| e.into_inner().len(), |p| p.len())
    }

    /// Returns `true` if no points were collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BatchSink for CollectingSink {
    /// Appends a batch to the cloud.
    ///
    /// * `worker` - The worker that produced the batch.
    /// * `points` - The points in emission order.
    fn consume(&self, _worker: usize, points: &[PointVertex]) {
        let mut cloud = self.points.lock().unwrap_or_else(|e| e.into_inner());
        cloud.extend_from_slice(points);
    }
}

/// Copies each batch into a channel for a consumer thread.
#[derive(Debug)]
pub struct ChannelSink {
    tx: Sender<(usize, Vec<PointVertex>)>,
}

impl ChannelSink {
    /// Create a new channel sink.
    ///
    /// * `tx` - The sending side of the channel.
    pub fn new(tx: Sender<(usize, Vec<PointVertex>)>) -> Self {
        Self { tx }
    }
}

impl BatchSink for ChannelSink {
    /// Sends a copy of the batch. Batches are dropped once the receiver is
    /// gone.
    ///
    /// * `worker` - The worker that produced the batch.
    /// * `points` - The points in emission order.
    fn consume(&self, worker: usize, points: &[PointVertex]) {
        if self.tx.send((worker, points.to_vec())).is_err() {
            debug!("Batch receiver disconnected; dropping {} points", points.len());
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
