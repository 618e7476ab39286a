//! Graph capabilities and a basic adjacency list implementation.

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use crate::edge::{BasicEdge, Edge};
use crate::reversal::{ReversalSwitch, ReversedProvider};

/// Graph capability consumed by the shortest path computations.
///
/// The sequence of outgoing edges must be finite.
pub trait Graph {
    type Node: Clone + Eq + Hash;
    type Edge: Edge<Self::Node> + Clone;

    fn outgoing_edges<'a>(&'a self, node: &Self::Node) -> Box<dyn Iterator<Item = Self::Edge> + 'a>;
}

/// Graph which also knows the edges ending in a node.
pub trait IncomingEdges: Graph {
    fn incoming_edges<'a>(&'a self, node: &Self::Node) -> Box<dyn Iterator<Item = Self::Edge> + 'a>;
}

/// Graph which can enumerate its nodes.
pub trait NodeSet: Graph {
    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Node> + 'a>;

    fn node_count(&self) -> usize;
}

/// Adjacency list graph over `BasicEdge`s.
///
/// Every stored edge is bound to the graph's reversal switch. Reversing the
/// graph flips the switch: edges report swapped endpoints and the outgoing
/// and incoming adjacency lists trade places, all in O(1).
///
/// Nodes are enumerated in insertion order.
pub struct BasicGraph<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    outgoing: Vec<Vec<Rc<BasicEdge<N>>>>,
    incoming: Vec<Vec<Rc<BasicEdge<N>>>>,
    edge_count: usize,
    switch: Rc<ReversalSwitch>,
}

impl<N: Clone + Eq + Hash> BasicGraph<N> {
    pub fn new() -> Self {
        BasicGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            edge_count: 0,
            switch: Rc::new(ReversalSwitch::new()),
        }
    }

    /// Adds a node, returns `false` if it was already there.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        self.index.insert(node.clone(), self.nodes.len());
        self.nodes.push(node);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        true
    }

    /// Adds an edge, inserting its endpoints as nodes when missing.
    /// The edge gets bound to this graph's reversal switch.
    pub fn add_edge(&mut self, mut edge: BasicEdge<N>) {
        // Read the stored endpoints through the reversal state the edge has right now
        let (source, destination) = if edge.is_reversed() {
            (edge.destination().clone(), edge.source().clone())
        } else {
            (edge.source().clone(), edge.destination().clone())
        };
        self.add_node(source.clone());
        self.add_node(destination.clone());

        edge.attach_reversal_source(self.switch.clone());
        let edge = Rc::new(edge);
        self.outgoing[self.index[&source]].push(edge.clone());
        self.incoming[self.index[&destination]].push(edge);
        self.edge_count += 1;
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_reversed(&self) -> bool {
        self.switch.is_reversed()
    }

    /// Presents the graph (and all its edges) as transposed or not.
    pub fn set_reversed(&self, reversed: bool) {
        self.switch.set_reversed(reversed);
    }

    /// Flips the reversal state, returns the new one.
    pub fn reverse(&self) -> bool {
        self.switch.toggle()
    }

    fn adjacent(&self, node: &N, incoming: bool) -> Box<dyn Iterator<Item = Rc<BasicEdge<N>>> + '_> {
        let lists = if incoming { &self.incoming } else { &self.outgoing };
        match self.index.get(node) {
            Some(&i) => Box::new(lists[i].iter().cloned()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<N: Clone + Eq + Hash> Default for BasicGraph<N> {
    fn default() -> Self {
        BasicGraph::new()
    }
}

impl<N: Clone + Eq + Hash> Graph for BasicGraph<N> {
    type Node = N;
    type Edge = Rc<BasicEdge<N>>;

    fn outgoing_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = Self::Edge> + 'a> {
        self.adjacent(node, self.is_reversed())
    }
}

impl<N: Clone + Eq + Hash> IncomingEdges for BasicGraph<N> {
    fn incoming_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = Self::Edge> + 'a> {
        self.adjacent(node, !self.is_reversed())
    }
}

impl<N: Clone + Eq + Hash> NodeSet for BasicGraph<N> {
    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = N> + 'a> {
        Box::new(self.nodes.iter().cloned())
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
