//! Graph model for shortest path computations.
//!
//! Nodes are opaque values supplied by the caller. Edges are directed and
//! carry a non-negative cost. A graph only has to expose the outgoing edges
//! of a node; the search crates never mutate it.

pub use self::edge::{BasicEdge, Edge};
pub use self::errors::{EdgeError, Result};
pub use self::graph::{BasicGraph, Graph, IncomingEdges, NodeSet};
pub use self::path::{EdgeCost, HasPathCost, Path};
pub use self::reversal::{ReversalSwitch, ReversedProvider};
pub use self::reversed::{ReversedEdge, ReversedGraph};

mod edge;
mod errors;
mod graph;
mod path;
mod reversal;
mod reversed;
