//! Pathstep
//!
//! Single-source shortest paths over weighted directed graphs, computed one
//! relaxation round at a time so the caller controls the pace of the search.
//!
//! ```
//! use pathstep::{Graph, StepwiseDijkstra};
//!
//! let mut graph = Graph::new();
//! for id in ["home", "park", "shop"] {
//!     graph.add_node(id)?;
//! }
//! graph.add_edge(&"home", "park", 2.0)?;
//! graph.add_edge(&"park", "shop", 1.0)?;
//! graph.add_edge(&"home", "shop", 5.0)?;
//!
//! let mut search = StepwiseDijkstra::new(&graph, "home", "shop");
//! while !search.step() {}
//! assert_eq!(search.route_to_target()?, &["home", "park", "shop"]);
//! # Ok::<(), pathstep::PathstepError>(())
//! ```

pub mod config;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod logging;
pub mod queue;

pub use config::PathstepConfig;
pub use dijkstra::{
    BestPaths, Path, SearchObserver, SearchState, SearchStats, SearchSummary, StepOutcome,
    StepwiseDijkstra, TracingObserver,
};
pub use error::{ErrorKind, PathstepError, Result};
pub use graph::{Edge, Graph, GraphProvider, Node, NodeId};
pub use queue::PriorityQueue;
