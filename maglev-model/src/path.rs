//! Shortest paths as sequences of edges.

use std::slice;

use crate::edge::Edge;

/// Something with a cost of travelling from a source to a destination.
pub trait HasPathCost {
    fn path_cost(&self) -> f64;
}

/// An edge together with the cost it contributed to a path.
///
/// The contributed cost can differ from `Edge::cost()` when the computation
/// that produced the path priced edges differently.
#[derive(Clone, PartialEq, Debug)]
pub struct EdgeCost<E> {
    edge: E,
    cost: f64,
}

impl<E> EdgeCost<E> {
    pub fn new(edge: E, cost: f64) -> Self {
        EdgeCost { edge, cost }
    }

    pub fn edge(&self) -> &E {
        &self.edge
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn into_edge(self) -> E {
        self.edge
    }
}

/// Path from a source to a destination, in travel order.
///
/// A path with no edges starts and ends at the same node.
#[derive(Clone, PartialEq, Debug)]
pub struct Path<N, E> {
    source: N,
    destination: N,
    edges: Vec<EdgeCost<E>>,
    total_cost: f64,
}

impl<N: Clone, E> Path<N, E> {
    /// Path of length zero anchored at the given node.
    pub fn empty(node: N) -> Self {
        Path {
            source: node.clone(),
            destination: node,
            edges: Vec::new(),
            total_cost: 0.0,
        }
    }

    /// Builds a path from edges in travel order. Endpoints are taken from the
    /// first and the last edge. Returns `None` if there are no edges, since
    /// the anchor node would be unknown.
    pub fn from_edges(edges: Vec<EdgeCost<E>>) -> Option<Self>
    where
        E: Edge<N>,
    {
        let source = edges.first()?.edge.source().clone();
        let destination = edges.last()?.edge.destination().clone();
        let total_cost = edges.iter().map(EdgeCost::cost).sum();
        Some(Path {
            source,
            destination,
            edges,
            total_cost,
        })
    }
}

impl<N, E> Path<N, E> {
    pub fn source(&self) -> &N {
        &self.source
    }

    pub fn destination(&self) -> &N {
        &self.destination
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[EdgeCost<E>] {
        &self.edges
    }

    pub fn iter(&self) -> slice::Iter<'_, EdgeCost<E>> {
        self.edges.iter()
    }
}

impl<N, E> HasPathCost for Path<N, E> {
    fn path_cost(&self) -> f64 {
        self.total_cost
    }
}

impl<'a, N, E> IntoIterator for &'a Path<N, E> {
    type Item = &'a EdgeCost<E>;
    type IntoIter = slice::Iter<'a, EdgeCost<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl<N, E> IntoIterator for Path<N, E> {
    type Item = EdgeCost<E>;
    type IntoIter = std::vec::IntoIter<EdgeCost<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::edge::BasicEdge;

    use super::*;

    fn edge_cost(s: &'static str, d: &'static str, cost: f64) -> EdgeCost<BasicEdge<&'static str>> {
        EdgeCost::new(BasicEdge::new(s, d, cost).expect("bad test edge"), cost)
    }

    #[test]
    fn test_empty_path() {
        let p = Path::<_, BasicEdge<&str>>::empty("A");
        assert_eq!(*p.source(), "A");
        assert_eq!(*p.destination(), "A");
        assert_eq!(p.len(), 0);
        assert!(p.is_empty());
        assert_eq!(p.total_cost(), 0.0);
        assert_eq!(p.path_cost(), 0.0);
        assert_eq!(p.iter().count(), 0);
    }

    #[test]
    fn test_path_from_edges() {
        let p = Path::from_edges(vec![edge_cost("A", "B", 1.0), edge_cost("B", "C", 2.0)]).expect("non-empty path");
        assert_eq!(*p.source(), "A");
        assert_eq!(*p.destination(), "C");
        assert_eq!(p.len(), 2);
        assert_eq!(p.total_cost(), 3.0);
        let hops = p.iter().map(|ec| (*ec.edge().source(), *ec.edge().destination())).collect::<Vec<_>>();
        assert_eq!(hops, vec![("A", "B"), ("B", "C")]);
        let costs = p.into_iter().map(|ec| ec.cost()).collect::<Vec<_>>();
        assert_eq!(costs, vec![1.0, 2.0]);

        assert!(Path::<&str, BasicEdge<&str>>::from_edges(Vec::new()).is_none());
    }
}
