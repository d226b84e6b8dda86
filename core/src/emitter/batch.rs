//! Point batches

use super::BatchSink;
use crate::color::*;
use crate::geometry::*;

/// A solid point in the volume's local frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointVertex {
    /// Local-frame position.
    pub position: Point3f,

    /// Display color.
    pub color: Rgb,
}

impl PointVertex {
    /// Create a new point.
    ///
    /// * `position` - Local-frame position.
    /// * `color`    - Display color.
    pub fn new(position: Point3f, color: Rgb) -> Self {
        Self { position, color }
    }
}

/// A worker's fixed-capacity point buffer. Points are handed to the sink
/// whenever the buffer fills up and once more when the worker finishes.
pub struct BatchEmitter<'a> {
    /// Worker that owns the buffer.
    worker: usize,

    /// The buffered points.
    points: Vec<PointVertex>,

    /// Maximum number of points in a batch.
    capacity: usize,

    /// Receives the batches.
    sink: &'a dyn BatchSink,

    /// Number of batches handed to the sink.
    flushed: usize,
}

impl<'a> BatchEmitter<'a> {
    /// Create a new batch emitter.
    ///
    /// * `worker`   - Worker that owns the buffer.
    /// * `capacity` - Maximum number of points in a batch; at least 1.
    /// * `sink`     - Receives the batches.
    pub fn new(worker: usize, capacity: usize, sink: &'a dyn BatchSink) -> Self {
        let capacity = capacity.max(1);
        Self {
            worker,
            points: Vec::with_capacity(capacity),
            capacity,
            sink,
            flushed: 0,
        }
    }

    /// Appends a point and flushes if the batch is full.
    ///
    /// * `position` - Local-frame position.
    /// * `color`    - Display color.
    #[inline]
    pub fn emit(&mut self, position: Point3f, color: Rgb) {
        self.points.push(PointVertex::new(position, color));
        if self.points.len() >= self.capacity {
            self.flush();
        }
    }

    /// Returns the number of buffered points.
    pub fn pending(&self) -> usize {
        self.points.len()
    }

    /// Hands any buffered points to the sink and clears the buffer.
    pub fn flush(&mut self) {
        if !self.points.is_empty() {
            self.sink.consume(self.worker, &self.points);
            self.points.clear();
            self.flushed += 1;
        }
    }

    /// Flushes the remaining points and returns the number of batches handed
    /// to the sink.
    pub fn finish(mut self) -> usize {
        self.flush();
        self.flushed
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
