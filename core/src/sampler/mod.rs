//! Volume sampler

mod dispatcher;
mod partition;
mod worker;

// Re-export
pub use dispatcher::*;
pub use partition::*;
pub use worker::*;
