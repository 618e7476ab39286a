//! Landmark selection.
//!
//! Landmarks are nodes used to approximate distances (see `LandmarkMetric`).
//! A good landmark lies on many shortest paths, typically somewhere at the
//! border of the graph.

use std::collections::HashSet;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use maglev_model::NodeSet;

use super::computation::ShortestPathComputation;
use super::dijkstra::Dijkstra;

/// Provides landmarks.
pub trait LandmarkProvider<N> {
    /// Up to `amount` distinct landmarks. If the graph has fewer nodes than
    /// requested, all of them are returned.
    fn landmarks(&self, amount: usize) -> Vec<N>;
}

impl<N, F> LandmarkProvider<N> for F
where
    F: Fn(usize) -> Vec<N>,
{
    fn landmarks(&self, amount: usize) -> Vec<N> {
        self(amount)
    }
}

/// Picks a random first landmark, then repeatedly the node farthest away
/// from all landmarks chosen so far.
///
/// When no unchosen node is reachable from the current landmarks any more
/// (disconnected graph), a random unchosen node is taken instead.
pub struct GreedyFarthestLandmarks<'g, G> {
    graph: &'g G,
    seed: u64,
}

impl<'g, G: NodeSet> GreedyFarthestLandmarks<'g, G> {
    pub fn new(graph: &'g G, seed: u64) -> Self {
        GreedyFarthestLandmarks { graph, seed }
    }
}

impl<'g, G: NodeSet> LandmarkProvider<G::Node> for GreedyFarthestLandmarks<'g, G> {
    fn landmarks(&self, amount: usize) -> Vec<G::Node> {
        let nodes = self.graph.nodes().collect::<Vec<_>>();
        if amount > nodes.len() {
            warn!("requested {} landmarks but graph only has {} node(s)", amount, nodes.len());
        }
        let amount = amount.min(nodes.len());
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut landmarks = Vec::with_capacity(amount);
        let mut chosen = HashSet::with_capacity(amount);

        let dijkstra = Dijkstra::new(self.graph);
        while landmarks.len() < amount {
            let farthest = if landmarks.is_empty() {
                None
            } else {
                let reachable = dijkstra.compute_shortest_path_costs_reachable(&landmarks);
                // Ties go to the node enumerated first
                nodes
                    .iter()
                    .filter(|n| !chosen.contains(*n))
                    .filter_map(|n| reachable.get(n).map(|d| (n, d.tentative_distance())))
                    .fold(None, |best: Option<(&G::Node, f64)>, (n, cost)| match best {
                        Some((_, best_cost)) if best_cost >= cost => best,
                        _ => Some((n, cost)),
                    })
                    .map(|(n, _)| n.clone())
            };

            let next = match farthest {
                Some(node) => node,
                None => {
                    let unchosen = nodes.iter().filter(|n| !chosen.contains(*n)).collect::<Vec<_>>();
                    match unchosen.choose(&mut rng) {
                        Some(&node) => node.clone(),
                        None => break,
                    }
                }
            };
            chosen.insert(next.clone());
            landmarks.push(next);
        }

        debug!("selected {} farthest landmark(s) out of {} node(s)", landmarks.len(), nodes.len());
        landmarks
    }
}

/// Uniformly random landmarks, reproducible for a given seed.
pub struct RandomLandmarks<'g, G> {
    graph: &'g G,
    seed: u64,
}

impl<'g, G: NodeSet> RandomLandmarks<'g, G> {
    pub fn new(graph: &'g G, seed: u64) -> Self {
        RandomLandmarks { graph, seed }
    }
}

impl<'g, G: NodeSet> LandmarkProvider<G::Node> for RandomLandmarks<'g, G> {
    fn landmarks(&self, amount: usize) -> Vec<G::Node> {
        let nodes = self.graph.nodes().collect::<Vec<_>>();
        if amount > nodes.len() {
            warn!("requested {} landmarks but graph only has {} node(s)", amount, nodes.len());
        }
        let mut rng = StdRng::seed_from_u64(self.seed);
        let landmarks = nodes.choose_multiple(&mut rng, amount).cloned().collect::<Vec<_>>();
        debug!("selected {} random landmark(s)", landmarks.len());
        landmarks
    }
}
