use crate::graph::types::{Edge, NodeId};
use crate::graph::Graph;

/// Trait for providing read-only adjacency to a search
pub trait GraphProvider<N: NodeId> {
    /// Outgoing edges of `id`, or `None` when the node is not registered
    fn outbound_edges(&self, id: &N) -> Option<&[Edge<N>]>;

    fn contains_node(&self, id: &N) -> bool {
        self.outbound_edges(id).is_some()
    }
}

impl<N: NodeId> GraphProvider<N> for Graph<N> {
    fn outbound_edges(&self, id: &N) -> Option<&[Edge<N>]> {
        self.node(id).map(|node| node.edges())
    }

    fn contains_node(&self, id: &N) -> bool {
        Graph::contains_node(self, id)
    }
}
