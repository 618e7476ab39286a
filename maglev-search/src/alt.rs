//! ALT: A* with landmarks and the triangle inequality.
//!
//! For every landmark `L` the exact costs `d(L, v)` and `d(v, L)` are
//! precomputed. By the triangle inequality both `d(L, t) - d(L, v)` and
//! `d(v, L) - d(t, L)` are lower bounds of `d(v, t)`; the largest bound over
//! all landmarks is the estimate.

use std::collections::HashMap;
use std::hash::Hash;

use log::debug;

use maglev_model::{Graph, IncomingEdges, ReversedGraph};

use super::computation::ShortestPathComputation;
use super::dijkstra::{Dijkstra, ShortestPathSearch};
use super::landmarks::LandmarkProvider;
use super::metric::Metric;
use super::policy::AStar;

/// ALT search policy.
pub type Alt<N> = AStar<LandmarkMetric<N>>;

/// ALT search over a graph.
pub type AltSearch<'g, G> = ShortestPathSearch<'g, G, Alt<<G as Graph>::Node>>;

/// Precomputed landmark distance tables, usable as an A* metric.
#[derive(Clone, Debug)]
pub struct LandmarkMetric<N> {
    tables: Vec<LandmarkTable<N>>,
}

#[derive(Clone, Debug)]
struct LandmarkTable<N> {
    landmark: N,
    /// `d(landmark, v)`, only for nodes reachable from the landmark.
    from_landmark: HashMap<N, f64>,
    /// `d(v, landmark)`, only for nodes which can reach the landmark.
    to_landmark: HashMap<N, f64>,
}

impl<N: Clone + Eq + Hash> LandmarkMetric<N> {
    /// Builds the tables by searching from every landmark, forward over
    /// `graph` and backward over its reversed view.
    pub fn new<G>(graph: &G, landmarks: Vec<N>) -> Self
    where
        G: IncomingEdges<Node = N>,
    {
        let forward = Dijkstra::new(graph);
        let reversed = ReversedGraph::new(graph);
        let backward = Dijkstra::new(&reversed);

        let tables = landmarks
            .into_iter()
            .map(|landmark| {
                let from_landmark = forward
                    .shortest_path_costs_reachable(&landmark)
                    .into_iter()
                    .map(|(node, d)| (node, d.tentative_distance()))
                    .collect::<HashMap<_, _>>();
                let to_landmark = backward
                    .shortest_path_costs_reachable(&landmark)
                    .into_iter()
                    .map(|(node, d)| (node, d.tentative_distance()))
                    .collect::<HashMap<_, _>>();
                LandmarkTable {
                    landmark,
                    from_landmark,
                    to_landmark,
                }
            })
            .collect::<Vec<_>>();

        debug!("built distance tables for {} landmark(s)", tables.len());
        LandmarkMetric { tables }
    }

    /// Asks `provider` for `amount` landmarks and builds their tables.
    pub fn with_provider<G, P>(graph: &G, provider: &P, amount: usize) -> Self
    where
        G: IncomingEdges<Node = N>,
        P: LandmarkProvider<N> + ?Sized,
    {
        Self::new(graph, provider.landmarks(amount))
    }

    pub fn landmarks(&self) -> impl Iterator<Item = &N> {
        self.tables.iter().map(|t| &t.landmark)
    }

    pub fn landmark_count(&self) -> usize {
        self.tables.len()
    }
}

impl<N: Eq + Hash> Metric<N> for LandmarkMetric<N> {
    /// Infinite if `to` can reach a landmark that `from` cannot reach, since
    /// then `from` cannot reach `to` either.
    fn distance(&self, from: &N, to: &N) -> f64 {
        let mut estimate = 0.0;
        for table in &self.tables {
            // A landmark only contributes bounds it has both distances for
            if let (Some(l_from), Some(l_to)) = (table.from_landmark.get(from), table.from_landmark.get(to)) {
                estimate = f64::max(estimate, l_to - l_from);
            }
            match (table.to_landmark.get(from), table.to_landmark.get(to)) {
                (Some(from_l), Some(to_l)) => estimate = f64::max(estimate, from_l - to_l),
                (None, Some(_)) => return f64::INFINITY,
                _ => {}
            }
        }
        estimate
    }
}

impl<'g, G> ShortestPathSearch<'g, G, Alt<G::Node>>
where
    G: IncomingEdges,
{
    /// ALT search with `amount` landmarks taken from `provider`.
    pub fn with_landmarks<P>(graph: &'g G, provider: &P, amount: usize) -> Self
    where
        P: LandmarkProvider<G::Node> + ?Sized,
    {
        let metric = LandmarkMetric::with_provider(graph, provider, amount);
        ShortestPathSearch::with_policy(graph, AStar::new(metric))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use maglev_model::{BasicEdge, BasicGraph, NodeSet};

    use crate::landmarks::{GreedyFarthestLandmarks, RandomLandmarks};

    use super::*;

    fn grid(size: usize) -> BasicGraph<(usize, usize)> {
        let mut g = BasicGraph::new();
        for x in 0..size {
            for y in 0..size {
                let cost = 1.0 + ((x * 7 + y * 3) % 5) as f64;
                if x + 1 < size {
                    g.add_edge(BasicEdge::new((x, y), (x + 1, y), cost).expect("bad test edge"));
                    g.add_edge(BasicEdge::new((x + 1, y), (x, y), cost + 1.0).expect("bad test edge"));
                }
                if y + 1 < size {
                    g.add_edge(BasicEdge::new((x, y), (x, y + 1), cost).expect("bad test edge"));
                    g.add_edge(BasicEdge::new((x, y + 1), (x, y), cost * 2.0).expect("bad test edge"));
                }
            }
        }
        g
    }

    #[test]
    fn test_estimate_is_admissible() {
        let g = grid(6);
        let metric = LandmarkMetric::with_provider(&g, &GreedyFarthestLandmarks::new(&g, 5), 4);
        assert_eq!(metric.landmark_count(), 4);
        let dijkstra = Dijkstra::new(&g);
        for from in g.nodes() {
            let exact = dijkstra.shortest_path_costs_reachable(&from);
            for to in g.nodes() {
                let estimate = metric.distance(&from, &to);
                assert!(estimate >= 0.0);
                assert!(estimate <= exact[&to].tentative_distance() + 1e-9);
            }
        }
    }

    #[test]
    fn test_estimate_exact_towards_landmark() {
        let g = grid(4);
        let landmark = (3, 3);
        let metric = LandmarkMetric::new(&g, vec![landmark]);
        let dijkstra = Dijkstra::new(&g);
        // d(v, L) - d(L, L) is exact when the destination is the landmark itself
        for from in g.nodes() {
            let exact = dijkstra.shortest_path_cost(&from, &landmark).expect("grid is connected");
            assert_eq!(metric.distance(&from, &landmark), exact);
        }
        assert_eq!(metric.landmarks().collect::<Vec<_>>(), vec![&landmark]);
    }

    #[test]
    fn test_no_landmarks_is_zero_heuristic() {
        let g = grid(3);
        let metric = LandmarkMetric::new(&g, Vec::new());
        assert_eq!(metric.distance(&(0, 0), &(2, 2)), 0.0);
    }

    #[test]
    fn test_isolated_landmark_contributes_nothing() {
        let mut g = BasicGraph::new();
        g.add_edge(BasicEdge::new("A", "B", 2.0).expect("bad test edge"));
        g.add_node("L");
        let metric = LandmarkMetric::new(&g, vec!["L"]);
        assert_eq!(metric.distance(&"A", &"B"), 0.0);
    }

    #[test]
    fn test_alt_matches_dijkstra() {
        let g = grid(7);
        let dijkstra = Dijkstra::new(&g);
        let alt = AltSearch::with_landmarks(&g, &RandomLandmarks::new(&g, 11), 3);
        let mut rng = SmallRng::seed_from_u64(1_311_768_467_294_899_695);
        for _ in 0..50 {
            let s = (rng.gen_range(0, 7), rng.gen_range(0, 7));
            let t = (rng.gen_range(0, 7), rng.gen_range(0, 7));
            let expected = dijkstra.shortest_path_cost(&s, &t).expect("grid is connected");
            let path = alt.shortest_path(&s, &t).expect("grid is connected");
            assert!((path.total_cost() - expected).abs() < 1e-9);

            let space = alt.search_space(&s, &t);
            assert!(space.contains(&s) && space.contains(&t));
        }
    }

    #[test]
    fn test_alt_on_directed_line() {
        let mut g = BasicGraph::new();
        for n in 1..20usize {
            g.add_edge(BasicEdge::new(n - 1, n, 1.0).expect("bad test edge"));
        }
        g.add_edge(BasicEdge::new(0usize, 100, 1.0).expect("bad test edge"));
        let alt = AltSearch::with_landmarks(&g, &|_: usize| vec![19usize], 1);
        assert_eq!(alt.shortest_path_cost(&0, &19), Some(19.0));
        // 100 cannot reach the landmark while 19 can, so 100 is estimated
        // infinitely far and never settled
        assert_eq!(alt.policy().metric().distance(&100, &19), f64::INFINITY);
        assert_eq!(alt.search_space(&0, &19).len(), 20);
        assert_eq!(alt.shortest_path_cost(&19, &0), None);
    }
}
