//! Weighted directed graph
//!
//! Nodes are keyed by a caller-chosen identifier and own their outgoing
//! edges. The structure is append-only: nodes and edges are added while
//! building, and a search only ever reads it.
//!
//! Edges may point at nodes that are not registered (yet). That is not
//! checked here; the search reports such nodes as dangling when it reaches
//! them.

pub mod traversal;
pub mod types;

use std::collections::HashMap;
use std::fmt;

use crate::error::{PathstepError, Result};

pub use traversal::GraphProvider;
pub use types::{Edge, Node, NodeId};

/// A weighted directed graph keyed by `N`
#[derive(Debug, Clone)]
pub struct Graph<N: NodeId> {
    nodes: HashMap<N, Node<N>>,
    /// Registration order, for deterministic enumeration
    order: Vec<N>,
}

impl<N: NodeId> Graph<N> {
    pub fn new() -> Self {
        Graph {
            nodes: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register an empty node under `id`
    pub fn add_node(&mut self, id: N) -> Result<()> {
        self.insert_node(id, Node::new())
    }

    /// Register a pre-built node under `id`
    pub fn insert_node(&mut self, id: N, node: Node<N>) -> Result<()> {
        if self.nodes.contains_key(&id) {
            return Err(PathstepError::duplicate_key("node", format!("{:?}", id)));
        }
        self.order.push(id.clone());
        self.nodes.insert(id, node);
        Ok(())
    }

    /// Append an edge to `source`'s edge list.
    ///
    /// `destination` does not have to be registered.
    pub fn add_edge(&mut self, source: &N, destination: N, cost: f64) -> Result<()> {
        match self.nodes.get_mut(source) {
            Some(node) => {
                node.add_edge(Edge::with_cost(destination, cost));
                Ok(())
            }
            None => Err(PathstepError::not_found(
                "edge source node",
                format!("{:?}", source),
            )),
        }
    }

    /// Append an edge with the default cost of zero
    pub fn add_unit_edge(&mut self, source: &N, destination: N) -> Result<()> {
        self.add_edge(source, destination, 0.0)
    }

    pub fn node(&self, id: &N) -> Option<&Node<N>> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: &N) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in registration order
    pub fn nodes(&self) -> impl Iterator<Item = (&N, &Node<N>)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.nodes.get(id).map(|node| (id, node)))
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &N> + '_ {
        self.order.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (id, node)) in self.nodes().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:?}: {}", id, node)?;
        }
        Ok(())
    }
}
