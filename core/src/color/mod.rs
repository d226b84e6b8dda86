//! Color

mod palette;
mod rgb;

// Re-export
pub use palette::*;
pub use rgb::*;
