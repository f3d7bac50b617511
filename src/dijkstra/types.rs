use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// A route from the origin together with its cumulative cost.
///
/// Paths compare by length only. The route always holds at least the
/// origin.
#[derive(Debug, Clone, Serialize)]
pub struct Path<N> {
    route: Vec<N>,
    length: f64,
}

impl<N> Path<N> {
    /// The zero-length path consisting of just `origin`
    pub fn new(origin: N) -> Self {
        Path {
            route: vec![origin],
            length: 0.0,
        }
    }

    pub fn route(&self) -> &[N] {
        &self.route
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// The node this path ends at
    pub fn last(&self) -> &N {
        &self.route[self.route.len() - 1]
    }

    pub fn into_route(self) -> Vec<N> {
        self.route
    }
}

impl<N: Clone> Path<N> {
    /// A copy of this path continued over an edge to `destination`
    pub fn extend(&self, destination: N, cost: f64) -> Self {
        let mut route = Vec::with_capacity(self.route.len() + 1);
        route.extend_from_slice(&self.route);
        route.push(destination);
        Path {
            route,
            length: self.length + cost,
        }
    }
}

impl<N> PartialEq for Path<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Path<N> {}

impl<N> PartialOrd for Path<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Path<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length.total_cmp(&other.length)
    }
}

impl<N: fmt::Debug> fmt::Display for Path<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : ", self.length)?;
        for (i, id) in self.route.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", id)?;
        }
        Ok(())
    }
}

/// Best path found so far for every reached node
pub type BestPaths<N> = HashMap<N, Path<N>>;

/// Lifecycle of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchState {
    /// Initialized, no step taken yet
    Ready,
    /// At least one step taken, paths still pending
    Stepping,
    /// Queue drained; further steps do nothing
    Done,
}

/// What a single step did
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome<N> {
    /// Nothing was pending
    Done,
    /// The popped path had been superseded by a shorter one and was dropped
    Stale { node: N, length: f64 },
    /// The popped path's edges were relaxed; `improved` paths were queued
    Expanded { node: N, length: f64, improved: usize },
    /// The popped path ends at a node the graph does not contain
    Dangling { node: N, length: f64 },
}

impl<N> StepOutcome<N> {
    pub fn is_done(&self) -> bool {
        matches!(self, StepOutcome::Done)
    }
}

/// Counters for one search, reset by `init`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Steps that popped a path
    pub steps: usize,
    /// Popped paths dropped as stale
    pub stale_discards: usize,
    /// Edges examined
    pub relaxations: usize,
    /// Paths pushed onto the queue, the origin included
    pub enqueued: usize,
}

/// Serializable snapshot of a search
#[derive(Debug, Clone, Serialize)]
pub struct SearchSummary<N> {
    pub origin: N,
    pub target: N,
    pub state: SearchState,
    pub stats: SearchStats,
    pub reached: usize,
    pub pending: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_to_target: Option<Path<N>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dangling: Vec<N>,
}
