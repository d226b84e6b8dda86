//! Frame state

mod camera_frame;
mod snapshot;
mod volume;

// Re-export
pub use camera_frame::*;
pub use snapshot::*;
pub use volume::*;
