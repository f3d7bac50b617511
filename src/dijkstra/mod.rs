//! Stepwise Dijkstra shortest-path search
//!
//! The search is an explicit state object driven by the caller: every call
//! to [`StepwiseDijkstra::step`] performs one relaxation round, so the
//! caller can pause, inspect or render between rounds.
//!
//! The priority queue has no decrease-key. A node may therefore be queued
//! several times at different lengths; when a path comes out of the queue
//! and the best-path table already holds something strictly shorter for
//! its end node, the path is discarded unexpanded (lazy deletion).
//!
//! The search always drains the whole reachable component. It does not stop
//! when the target is settled.

pub mod observer;
pub mod types;

use std::time::Instant;

use crate::bail_not_found;
use crate::config::QueueConfig;
use crate::error::Result;
use crate::graph::{GraphProvider, NodeId};
use crate::queue::PriorityQueue;
use crate::{log_search_stats, trace_time};

pub use observer::{SearchObserver, TracingObserver};
pub use types::{BestPaths, Path, SearchState, SearchStats, SearchSummary, StepOutcome};

/// Incremental single-source shortest-path search over a borrowed graph
pub struct StepwiseDijkstra<'g, N: NodeId> {
    graph: &'g dyn GraphProvider<N>,
    origin: N,
    target: N,
    queue_config: QueueConfig,
    queue: PriorityQueue<Path<N>>,
    best_paths: BestPaths<N>,
    dangling: Vec<N>,
    stats: SearchStats,
}

impl<'g, N: NodeId> StepwiseDijkstra<'g, N> {
    /// Create a search from `origin` towards `target`, ready to step
    pub fn new<G: GraphProvider<N>>(graph: &'g G, origin: N, target: N) -> Self {
        Self::build(graph, origin, target, QueueConfig::default())
    }

    /// Like [`new`](Self::new), sizing the queue from `config`
    pub fn with_config<G: GraphProvider<N>>(
        graph: &'g G,
        origin: N,
        target: N,
        config: &QueueConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(graph, origin, target, config.clone()))
    }

    fn build(graph: &'g dyn GraphProvider<N>, origin: N, target: N, config: QueueConfig) -> Self {
        let mut search = StepwiseDijkstra {
            graph,
            origin: origin.clone(),
            target: target.clone(),
            queue: PriorityQueue::with_depth(config.initial_depth),
            queue_config: config,
            best_paths: BestPaths::new(),
            dangling: Vec::new(),
            stats: SearchStats::default(),
        };
        search.rebind(graph, origin, target);
        search
    }

    /// Bind a graph, origin and target and reset to [`SearchState::Ready`].
    ///
    /// The queue and best-path table are replaced by fresh ones seeded with
    /// the zero-length path at `origin`.
    pub fn init<G: GraphProvider<N>>(&mut self, graph: &'g G, origin: N, target: N) {
        self.rebind(graph, origin, target);
    }

    fn rebind(&mut self, graph: &'g dyn GraphProvider<N>, origin: N, target: N) {
        self.graph = graph;
        self.origin = origin;
        self.target = target;

        self.queue = PriorityQueue::with_depth(self.queue_config.initial_depth);
        self.best_paths = BestPaths::new();
        self.dangling = Vec::new();
        self.stats = SearchStats::default();

        let start = Path::new(self.origin.clone());
        self.best_paths.insert(self.origin.clone(), start.clone());
        self.queue.insert(start);
        self.stats.enqueued = 1;

        tracing::debug!(origin = ?self.origin, target = ?self.target, "search initialized");
    }

    /// Perform one round. Returns `true` once nothing is pending; from then
    /// on every call returns `true` without touching any state.
    pub fn step(&mut self) -> bool {
        self.advance().is_done()
    }

    /// Perform one round and report what it did
    pub fn advance(&mut self) -> StepOutcome<N> {
        if self.queue.is_empty() {
            return StepOutcome::Done;
        }
        let Ok(path) = self.queue.dequeue() else {
            return StepOutcome::Done;
        };
        self.stats.steps += 1;

        let node = path.last().clone();
        let length = path.length();

        if self
            .best_paths
            .get(&node)
            .is_some_and(|best| best.length() < length)
        {
            self.stats.stale_discards += 1;
            tracing::trace!(node = ?node, length, "discarding stale path");
            return StepOutcome::Stale { node, length };
        }

        let graph = self.graph;
        let Some(edges) = graph.outbound_edges(&node) else {
            tracing::warn!(node = ?node, length, "reached node missing from graph");
            if !self.dangling.contains(&node) {
                self.dangling.push(node.clone());
            }
            return StepOutcome::Dangling { node, length };
        };

        let mut improved = 0;
        for edge in edges {
            self.stats.relaxations += 1;
            let candidate = length + edge.cost;

            if self
                .best_paths
                .get(&edge.destination)
                .is_some_and(|best| best.length() <= candidate)
            {
                continue;
            }

            let better = path.extend(edge.destination.clone(), edge.cost);
            self.best_paths
                .insert(edge.destination.clone(), better.clone());
            self.queue.insert(better);
            self.stats.enqueued += 1;
            improved += 1;
        }

        tracing::trace!(node = ?node, length, improved, pending = self.queue.len(), "expanded");
        StepOutcome::Expanded {
            node,
            length,
            improved,
        }
    }

    /// Perform one round, then hand the outcome and best paths to `observer`
    pub fn advance_with(&mut self, observer: &mut dyn SearchObserver<N>) -> StepOutcome<N> {
        let outcome = self.advance();
        observer.on_step(&outcome, &self.best_paths);
        outcome
    }

    /// Step until done. Returns the number of rounds that did work.
    #[tracing::instrument(skip(self), fields(origin = ?self.origin, target = ?self.target))]
    pub fn run_to_completion(&mut self) -> usize {
        let start = Instant::now();
        let mut rounds = 0;
        while !self.step() {
            rounds += 1;
        }
        trace_time!(start, "run_to_completion", rounds = rounds);
        log_search_stats!(self.stats, "run_to_completion");
        rounds
    }

    pub fn state(&self) -> SearchState {
        if self.queue.is_empty() {
            SearchState::Done
        } else if self.stats.steps == 0 {
            SearchState::Ready
        } else {
            SearchState::Stepping
        }
    }

    pub fn origin(&self) -> &N {
        &self.origin
    }

    pub fn target(&self) -> &N {
        &self.target
    }

    pub fn best_paths(&self) -> &BestPaths<N> {
        &self.best_paths
    }

    pub fn best_path(&self, node: &N) -> Option<&Path<N>> {
        self.best_paths.get(node)
    }

    pub fn is_reached(&self, node: &N) -> bool {
        self.best_paths.contains_key(node)
    }

    /// Number of queued paths, stale ones included
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Reached nodes that the graph does not contain, in discovery order
    pub fn dangling_nodes(&self) -> &[N] {
        &self.dangling
    }

    /// Best known path to the target.
    ///
    /// Final once the search is done; before that it may still improve.
    pub fn path_to_target(&self) -> Result<&Path<N>> {
        match self.best_paths.get(&self.target) {
            Some(path) => Ok(path),
            None => bail_not_found!("route to target", format!("{:?}", self.target)),
        }
    }

    /// Route of [`path_to_target`](Self::path_to_target)
    pub fn route_to_target(&self) -> Result<&[N]> {
        self.path_to_target().map(Path::route)
    }

    pub fn summary(&self) -> SearchSummary<N> {
        SearchSummary {
            origin: self.origin.clone(),
            target: self.target.clone(),
            state: self.state(),
            stats: self.stats,
            reached: self.best_paths.len(),
            pending: self.queue.len(),
            path_to_target: self.best_paths.get(&self.target).cloned(),
            dangling: self.dangling.clone(),
        }
    }
}
