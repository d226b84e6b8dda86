//! Numeric helpers shared by every crate.

mod clamp;
mod common;

// Re-export
pub use clamp::*;
pub use common::*;
