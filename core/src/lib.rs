//! Core

#[macro_use]
extern crate log;

// Re-export.
pub mod app;
pub mod color;
pub mod density;
pub mod dither;
pub mod emitter;
pub mod error;
pub mod evaluator;
pub mod frame;
pub mod geometry;
pub mod host;
pub mod low_discrepancy;
pub mod numeric;
pub mod point_io;
pub mod sampler;
pub mod telemetry;
