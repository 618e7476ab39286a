//! Decision points of the label-setting search.
//!
//! The search loop itself is fixed. A policy decides how far a node is
//! estimated to be from the destination, what relaxing an edge costs, which
//! edges are relaxed at all and when to stop early. `Unguided` keeps all
//! defaults and turns the search into plain Dijkstra.

use std::time::Instant;

use maglev_model::{Edge, Graph};

use super::distance::TentativeDistance;
use super::metric::Metric;

pub trait SearchPolicy<G: Graph + ?Sized> {
    /// Lower bound of the cost from `node` to `destination`.
    ///
    /// Must be admissible (never overestimate) and monotone
    /// (`estimate(u) <= cost(u, v) + estimate(v)` for every edge `u -> v`).
    /// Settled nodes are never reopened, so a violating estimate silently
    /// yields suboptimal results.
    fn estimated_distance(&self, _node: &G::Node, _destination: &G::Node) -> f64 {
        0.0
    }

    /// Cost of relaxing `edge` when its source was reached at `tentative_distance`.
    /// Must not be negative.
    fn edge_cost(&self, edge: &G::Edge, _tentative_distance: f64) -> f64 {
        edge.cost()
    }

    /// Whether `edge` is relaxed at all.
    fn consider_edge(&self, _edge: &G::Edge, _destination: Option<&G::Node>) -> bool {
        true
    }

    /// Called right after a node was settled, `true` stops the search.
    fn should_abort(&self, _settled: &TentativeDistance<G::Node, G::Edge>) -> bool {
        false
    }
}

/// Dijkstra: no estimates, intrinsic edge costs, every edge, never aborts.
#[derive(Copy, Clone, Default, Debug)]
pub struct Unguided;

impl<G: Graph + ?Sized> SearchPolicy<G> for Unguided {}

/// A*: goal directed by a metric.
#[derive(Clone, Debug)]
pub struct AStar<M> {
    metric: M,
}

impl<M> AStar<M> {
    pub fn new(metric: M) -> Self {
        AStar { metric }
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }
}

impl<G, M> SearchPolicy<G> for AStar<M>
where
    G: Graph + ?Sized,
    M: Metric<G::Node>,
{
    fn estimated_distance(&self, node: &G::Node, destination: &G::Node) -> f64 {
        self.metric.distance(node, destination)
    }
}

/// Range limited search: stops once a node farther than `limit` got settled.
///
/// That first node beyond the limit stays in the result.
#[derive(Clone, Debug)]
pub struct CostLimit<P> {
    inner: P,
    limit: f64,
}

impl<P> CostLimit<P> {
    pub fn new(inner: P, limit: f64) -> Self {
        CostLimit { inner, limit }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }
}

impl<G, P> SearchPolicy<G> for CostLimit<P>
where
    G: Graph + ?Sized,
    P: SearchPolicy<G>,
{
    fn estimated_distance(&self, node: &G::Node, destination: &G::Node) -> f64 {
        self.inner.estimated_distance(node, destination)
    }

    fn edge_cost(&self, edge: &G::Edge, tentative_distance: f64) -> f64 {
        self.inner.edge_cost(edge, tentative_distance)
    }

    fn consider_edge(&self, edge: &G::Edge, destination: Option<&G::Node>) -> bool {
        self.inner.consider_edge(edge, destination)
    }

    fn should_abort(&self, settled: &TentativeDistance<G::Node, G::Edge>) -> bool {
        settled.tentative_distance() > self.limit || self.inner.should_abort(settled)
    }
}

/// Stops the search once the wall clock passed `deadline`.
/// Checked once per settled node.
#[derive(Clone, Debug)]
pub struct Deadline<P> {
    inner: P,
    deadline: Instant,
}

impl<P> Deadline<P> {
    pub fn new(inner: P, deadline: Instant) -> Self {
        Deadline { inner, deadline }
    }
}

impl<G, P> SearchPolicy<G> for Deadline<P>
where
    G: Graph + ?Sized,
    P: SearchPolicy<G>,
{
    fn estimated_distance(&self, node: &G::Node, destination: &G::Node) -> f64 {
        self.inner.estimated_distance(node, destination)
    }

    fn edge_cost(&self, edge: &G::Edge, tentative_distance: f64) -> f64 {
        self.inner.edge_cost(edge, tentative_distance)
    }

    fn consider_edge(&self, edge: &G::Edge, destination: Option<&G::Node>) -> bool {
        self.inner.consider_edge(edge, destination)
    }

    fn should_abort(&self, settled: &TentativeDistance<G::Node, G::Edge>) -> bool {
        self.inner.should_abort(settled) || Instant::now() >= self.deadline
    }
}
