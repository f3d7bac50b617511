use crate::dijkstra::types::{BestPaths, StepOutcome};
use crate::graph::NodeId;

/// Hook invoked after each step driven through `advance_with`.
///
/// Lets a caller render or inspect the search between rounds without the
/// engine itself producing output.
pub trait SearchObserver<N: NodeId> {
    fn on_step(&mut self, outcome: &StepOutcome<N>, best_paths: &BestPaths<N>);
}

/// Observer that logs every step and the best-path table through `tracing`
#[derive(Debug, Default)]
pub struct TracingObserver {
    steps: usize,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps observed so far
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<N: NodeId> SearchObserver<N> for TracingObserver {
    fn on_step(&mut self, outcome: &StepOutcome<N>, best_paths: &BestPaths<N>) {
        if outcome.is_done() {
            tracing::debug!(steps = self.steps, reached = best_paths.len(), "search done");
            return;
        }

        self.steps += 1;
        tracing::debug!(step = self.steps, outcome = ?outcome, reached = best_paths.len(), "step");
        for (node, path) in best_paths {
            tracing::debug!(node = ?node, path = %path, "best path");
        }
    }
}
