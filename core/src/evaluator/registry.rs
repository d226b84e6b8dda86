//! Evaluator registry

use super::{ArcEvaluator, Evaluator};
use std::fmt;
use std::sync::Arc;

/// An ordered, indexable set of evaluators fixed at construction.
#[derive(Clone, Default)]
pub struct EvaluatorRegistry {
    evaluators: Vec<ArcEvaluator>,
}

impl EvaluatorRegistry {
    /// Creates a new registry.
    ///
    /// * `evaluators` - The evaluators in selection order.
    pub fn new(evaluators: Vec<ArcEvaluator>) -> Self {
        Self { evaluators }
    }

    /// Appends an evaluator and returns the registry.
    ///
    /// * `evaluator` - The evaluator.
    pub fn with<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluators.push(Arc::new(evaluator));
        self
    }

    /// Returns the number of evaluators.
    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    /// Returns `true` if there are no evaluators.
    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }

    /// Returns the evaluator at an index.
    ///
    /// * `index` - The index.
    pub fn get(&self, index: usize) -> Option<&ArcEvaluator> {
        self.evaluators.get(index)
    }

    /// Returns the index of the first evaluator with the given name.
    ///
    /// * `name` - The evaluator name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.evaluators.iter().position(|e| e.name() == name)
    }

    /// Returns the evaluator names in selection order.
    pub fn names(&self) -> Vec<&'static str> {
        self.evaluators.iter().map(|e| e.name()).collect()
    }
}

impl fmt::Debug for EvaluatorRegistry {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
