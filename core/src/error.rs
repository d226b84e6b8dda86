//! Errors

use std::error::Error;
use std::fmt;

/// Reasons a frame could not be produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameError {
    /// A worker thread could not be spawned.
    Spawn {
        /// Index of the worker.
        worker: usize,

        /// The operating system error.
        message: String,
    },

    /// A worker thread panicked.
    WorkerPanicked {
        /// Index of the worker.
        worker: usize,

        /// The panic payload if it was a string.
        message: String,
    },

    /// The selected evaluator does not exist.
    NoEvaluator {
        /// The selected index.
        index: usize,
    },
}

impl fmt::Display for FrameError {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { worker, message } => {
                write!(f, "unable to spawn sampler worker {}: {}", worker, message)
            }
            Self::WorkerPanicked { worker, message } => {
                write!(f, "sampler worker {} panicked: {}", worker, message)
            }
            Self::NoEvaluator { index } => write!(f, "no evaluator at index {}", index),
        }
    }
}

impl Error for FrameError {}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
