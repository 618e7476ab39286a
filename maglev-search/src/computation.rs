//! Shortest path computation operations.

use std::collections::{HashMap, HashSet};
use std::slice;

use maglev_model::Path;

use super::distance::TentativeDistance;

/// Operations answered by a shortest path computation.
///
/// Sources are interchangeable: a node is reached from whichever source is
/// closest. An unreachable destination is not an error, the point-to-point
/// operations return `None` for it.
pub trait ShortestPathComputation<N, E> {
    /// Cheapest path from any of `sources` to `destination`.
    /// A source equal to the destination yields the empty path.
    fn compute_shortest_path(&self, sources: &[N], destination: &N) -> Option<Path<N, E>>;

    /// Cost of the cheapest path, without building the path.
    fn compute_shortest_path_cost(&self, sources: &[N], destination: &N) -> Option<f64>;

    /// Nodes settled while answering the point-to-point query.
    fn compute_search_space(&self, sources: &[N], destination: &N) -> HashSet<N>;

    /// Costs of all nodes reachable from `sources`.
    fn compute_shortest_path_costs_reachable(&self, sources: &[N]) -> HashMap<N, TentativeDistance<N, E>>;

    fn shortest_path(&self, source: &N, destination: &N) -> Option<Path<N, E>> {
        self.compute_shortest_path(slice::from_ref(source), destination)
    }

    fn shortest_path_cost(&self, source: &N, destination: &N) -> Option<f64> {
        self.compute_shortest_path_cost(slice::from_ref(source), destination)
    }

    fn search_space(&self, source: &N, destination: &N) -> HashSet<N> {
        self.compute_search_space(slice::from_ref(source), destination)
    }

    fn shortest_path_costs_reachable(&self, source: &N) -> HashMap<N, TentativeDistance<N, E>> {
        self.compute_shortest_path_costs_reachable(slice::from_ref(source))
    }
}
