//! Read-only transposed view of a graph.
//!
//! Unlike the reversal switch of `BasicGraph`, the view holds no shared
//! mutable state: the forward graph and any number of reversed views can be
//! searched side by side.

use std::fmt;

use crate::edge::Edge;
use crate::graph::{Graph, IncomingEdges, NodeSet};

/// Edge presented with swapped endpoints.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ReversedEdge<E>(E);

impl<E> ReversedEdge<E> {
    pub fn new(edge: E) -> Self {
        ReversedEdge(edge)
    }

    /// The edge as it is stored in the underlying graph.
    pub fn inner(&self) -> &E {
        &self.0
    }

    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<N, E: Edge<N>> Edge<N> for ReversedEdge<E> {
    fn cost(&self) -> f64 {
        self.0.cost()
    }

    fn source(&self) -> &N {
        self.0.destination()
    }

    fn destination(&self) -> &N {
        self.0.source()
    }
}

impl<E: fmt::Display> fmt::Display for ReversedEdge<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "reversed({})", self.0)
    }
}

/// Graph whose outgoing edges are the incoming edges of the wrapped graph.
pub struct ReversedGraph<'g, G> {
    graph: &'g G,
}

impl<'g, G> ReversedGraph<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        ReversedGraph { graph }
    }

    pub fn inner(&self) -> &'g G {
        self.graph
    }
}

impl<'g, G: IncomingEdges> Graph for ReversedGraph<'g, G> {
    type Node = G::Node;
    type Edge = ReversedEdge<G::Edge>;

    fn outgoing_edges<'a>(&'a self, node: &G::Node) -> Box<dyn Iterator<Item = Self::Edge> + 'a> {
        Box::new(self.graph.incoming_edges(node).map(ReversedEdge))
    }
}

impl<'g, G: IncomingEdges> IncomingEdges for ReversedGraph<'g, G> {
    fn incoming_edges<'a>(&'a self, node: &G::Node) -> Box<dyn Iterator<Item = Self::Edge> + 'a> {
        Box::new(self.graph.outgoing_edges(node).map(ReversedEdge))
    }
}

impl<'g, G: IncomingEdges + NodeSet> NodeSet for ReversedGraph<'g, G> {
    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = G::Node> + 'a> {
        self.graph.nodes()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

#[cfg(test)]
mod tests {
    use crate::edge::BasicEdge;
    use crate::graph::BasicGraph;

    use super::*;

    #[test]
    fn test_reversed_edge() {
        let e = ReversedEdge::new(BasicEdge::new("A", "B", 2.0).expect("bad test edge"));
        assert_eq!((*e.source(), *e.destination()), ("B", "A"));
        assert_eq!(e.cost(), 2.0);
        assert_eq!((*e.inner().source(), *e.inner().destination()), ("A", "B"));
        assert_eq!(e.to_string(), "reversed(A -(2)-> B)");
    }

    #[test]
    fn test_reversed_view() {
        let mut g = BasicGraph::new();
        g.add_edge(BasicEdge::new("A", "B", 1.0).expect("bad test edge"));
        g.add_edge(BasicEdge::new("C", "B", 2.0).expect("bad test edge"));
        let view = ReversedGraph::new(&g);

        let out = view.outgoing_edges(&"B").map(|e| (*e.source(), *e.destination(), e.cost())).collect::<Vec<_>>();
        assert_eq!(out, vec![("B", "A", 1.0), ("B", "C", 2.0)]);
        assert_eq!(view.outgoing_edges(&"A").count(), 0);
        assert_eq!(view.incoming_edges(&"A").map(|e| *e.source()).collect::<Vec<_>>(), vec!["B"]);
        assert_eq!(view.node_count(), 3);

        // The forward graph is untouched
        assert_eq!(g.outgoing_edges(&"A").count(), 1);
        assert!(!g.is_reversed());
    }

    #[test]
    fn test_view_of_reversed_graph_is_forward() {
        let mut g = BasicGraph::new();
        g.add_edge(BasicEdge::new("A", "B", 1.0).expect("bad test edge"));
        g.set_reversed(true);
        let view = ReversedGraph::new(&g);
        let out = view.outgoing_edges(&"A").map(|e| *e.destination()).collect::<Vec<_>>();
        assert_eq!(out, vec!["B"]);
    }
}
