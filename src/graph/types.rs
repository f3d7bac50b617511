use std::fmt;
use std::hash::Hash;

/// Capabilities a node identifier needs: map keying and readable errors.
///
/// Blanket-implemented, so integers, strings and user-defined keys all work.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> NodeId for T {}

/// A directed, weighted connection to `destination`.
///
/// Costs are expected to be non-negative; this is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<N> {
    pub destination: N,
    pub cost: f64,
}

impl<N> Edge<N> {
    /// Edge with the default cost of zero
    pub fn new(destination: N) -> Self {
        Self::with_cost(destination, 0.0)
    }

    pub fn with_cost(destination: N, cost: f64) -> Self {
        Edge { destination, cost }
    }
}

impl<N: fmt::Debug> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cost == 0.0 {
            write!(f, "({:?})", self.destination)
        } else {
            write!(f, "({:?}, {})", self.destination, self.cost)
        }
    }
}

/// Outgoing edges of a single node, in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct Node<N> {
    edges: Vec<Edge<N>>,
}

impl<N> Node<N> {
    pub fn new() -> Self {
        Node { edges: Vec::new() }
    }

    pub fn add_edge(&mut self, edge: Edge<N>) {
        self.edges.push(edge);
    }

    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<N> Default for Node<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> FromIterator<Edge<N>> for Node<N> {
    fn from_iter<I: IntoIterator<Item = Edge<N>>>(iter: I) -> Self {
        Node {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<N: fmt::Debug> fmt::Display for Node<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node: [")?;
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", edge)?;
        }
        write!(f, "]")
    }
}
