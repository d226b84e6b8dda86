//! Point emission

mod batch;
mod sink;

// Re-export
pub use batch::*;
pub use sink::*;
