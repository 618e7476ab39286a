//! Label-setting shortest path search.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use maglev_model::{Edge, Graph, Path};

use super::backtrack::backtrack;
use super::computation::ShortestPathComputation;
use super::distance::TentativeDistance;
use super::frontier::Frontier;
use super::metric::Metric;
use super::policy::{AStar, SearchPolicy, Unguided};

/// Settled nodes of one search run with the records they were settled with.
pub type Settled<N, E> = HashMap<N, TentativeDistance<N, E>>;

/// Generic label-setting search over a borrowed graph.
///
/// The loop is the one of Dijkstra's algorithm; the policy `P` supplies
/// estimates, edge costs, an edge filter and an abort condition (see
/// `SearchPolicy`). When the search settles a point-to-point destination it
/// has also settled every node estimated closer, which is the search space.
pub struct ShortestPathSearch<'g, G, P> {
    graph: &'g G,
    policy: P,
}

/// Dijkstra's algorithm, no sense of goal direction.
pub type Dijkstra<'g, G> = ShortestPathSearch<'g, G, Unguided>;

/// A* directed by the metric `M`.
pub type AStarSearch<'g, G, M> = ShortestPathSearch<'g, G, AStar<M>>;

impl<'g, G: Graph> ShortestPathSearch<'g, G, Unguided> {
    pub fn new(graph: &'g G) -> Self {
        ShortestPathSearch {
            graph,
            policy: Unguided,
        }
    }
}

impl<'g, G, M> ShortestPathSearch<'g, G, AStar<M>>
where
    G: Graph,
    M: Metric<G::Node>,
{
    pub fn with_metric(graph: &'g G, metric: M) -> Self {
        ShortestPathSearch {
            graph,
            policy: AStar::new(metric),
        }
    }
}

impl<'g, G, P> ShortestPathSearch<'g, G, P>
where
    G: Graph,
    P: SearchPolicy<G>,
{
    pub fn with_policy(graph: &'g G, policy: P) -> Self {
        ShortestPathSearch { graph, policy }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Runs the search from `sources` until the frontier is exhausted,
    /// `destination` is settled or the policy aborts.
    ///
    /// With several sources every node is reached from its closest source.
    /// Returns all settled nodes.
    pub fn settle(&self, sources: &[G::Node], destination: Option<&G::Node>) -> Settled<G::Node, G::Edge> {
        // Best known cost of every node seen so far, settled or in the frontier
        let mut best = HashMap::<G::Node, f64>::with_capacity(sources.len());
        let mut settled = Settled::with_capacity(sources.len());
        let mut frontier = Frontier::with_capacity(sources.len());

        for source in sources {
            best.insert(source.clone(), 0.0);
            frontier.push(self.create_distance(source.clone(), None, 0.0, destination));
        }

        while let Some(distance) = frontier.pop() {
            // A stale duplicate, the node was settled through a better record before
            if settled.contains_key(distance.node()) {
                continue;
            }

            let node = distance.node().clone();
            let tentative_distance = distance.tentative_distance();
            trace!("settling node at distance {} (priority {})", tentative_distance, distance.priority());

            let stop = destination.map_or(false, |d| *d == node) || self.policy.should_abort(&distance);
            settled.insert(node.clone(), distance);
            if stop {
                break;
            }

            for edge in self.graph.outgoing_edges(&node) {
                if !self.policy.consider_edge(&edge, destination) {
                    continue;
                }

                let target = edge.destination().clone();
                let target_distance = tentative_distance + self.policy.edge_cost(&edge, tentative_distance);

                if let Some(&known) = best.get(&target) {
                    // Settled nodes are never reopened
                    if settled.contains_key(&target) || target_distance >= known {
                        continue;
                    }
                }

                best.insert(target.clone(), target_distance);
                frontier.push(self.create_distance(target, Some(edge), target_distance, destination));
            }
        }

        debug!(
            "search from {} source(s) {} settled {} node(s), {} left in frontier",
            sources.len(),
            if destination.is_some() { "to destination" } else { "to exhaustion" },
            settled.len(),
            frontier.len(),
        );

        settled
    }

    /// Estimates are only asked for when there is a destination to estimate against.
    fn create_distance(
        &self,
        node: G::Node,
        parent_edge: Option<G::Edge>,
        tentative_distance: f64,
        destination: Option<&G::Node>,
    ) -> TentativeDistance<G::Node, G::Edge> {
        match destination {
            Some(destination) => {
                let estimate = self.policy.estimated_distance(&node, destination);
                TentativeDistance::with_estimate(node, parent_edge, tentative_distance, estimate)
            }
            None => TentativeDistance::new(node, parent_edge, tentative_distance),
        }
    }
}

impl<'g, G, P> ShortestPathComputation<G::Node, G::Edge> for ShortestPathSearch<'g, G, P>
where
    G: Graph,
    P: SearchPolicy<G>,
{
    fn compute_shortest_path(&self, sources: &[G::Node], destination: &G::Node) -> Option<Path<G::Node, G::Edge>> {
        let settled = self.settle(sources, Some(destination));
        backtrack(&settled, destination)
    }

    fn compute_shortest_path_cost(&self, sources: &[G::Node], destination: &G::Node) -> Option<f64> {
        let settled = self.settle(sources, Some(destination));
        settled.get(destination).map(TentativeDistance::tentative_distance)
    }

    fn compute_search_space(&self, sources: &[G::Node], destination: &G::Node) -> HashSet<G::Node> {
        self.settle(sources, Some(destination)).into_iter().map(|(node, _)| node).collect()
    }

    fn compute_shortest_path_costs_reachable(&self, sources: &[G::Node]) -> Settled<G::Node, G::Edge> {
        self.settle(sources, None)
    }
}
