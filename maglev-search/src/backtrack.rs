//! Path reconstruction from settled records.

use std::collections::HashMap;
use std::hash::Hash;

use maglev_model::{Edge, EdgeCost, Path};

use super::distance::TentativeDistance;

/// Follows parent edges from a settled `destination` back to a source.
///
/// The cost attributed to each edge is the difference of the tentative
/// distances at its two ends, i.e. what the search actually paid for it,
/// which is not necessarily `Edge::cost()`.
///
/// Returns `None` if the destination was not settled.
pub(super) fn backtrack<N, E>(settled: &HashMap<N, TentativeDistance<N, E>>, destination: &N) -> Option<Path<N, E>>
where
    N: Clone + Eq + Hash,
    E: Edge<N> + Clone,
{
    let mut current = settled.get(destination)?;
    if current.is_source() {
        return Some(Path::empty(destination.clone()));
    }

    let mut rev_edges = Vec::new();
    while let Some(edge) = current.parent_edge() {
        // A node is only ever reached from a settled node
        let parent = settled.get(edge.source());
        debug_assert!(parent.is_some(), "parent of a settled node is not settled");
        let parent = parent?;

        rev_edges.push(EdgeCost::new(edge.clone(), current.tentative_distance() - parent.tentative_distance()));
        current = parent;
    }

    rev_edges.reverse();
    Path::from_edges(rev_edges)
}

#[cfg(test)]
mod tests {
    use maglev_model::BasicEdge;

    use super::*;

    type E = BasicEdge<&'static str>;

    fn edge(s: &'static str, d: &'static str, cost: f64) -> E {
        BasicEdge::new(s, d, cost).expect("bad test edge")
    }

    #[test]
    fn test_backtrack() {
        let mut settled = HashMap::new();
        settled.insert("A", TentativeDistance::new("A", None, 0.0));
        settled.insert("B", TentativeDistance::new("B", Some(edge("A", "B", 1.0)), 1.5));
        settled.insert("C", TentativeDistance::new("C", Some(edge("B", "C", 2.0)), 4.0));

        let path = backtrack(&settled, &"C").expect("path must exist");
        assert_eq!((*path.source(), *path.destination()), ("A", "C"));
        let costs = path.iter().map(EdgeCost::cost).collect::<Vec<_>>();
        // Attributed costs come from the tentative distances, not the raw edge costs
        assert_eq!(costs, vec![1.5, 2.5]);
        assert_eq!(path.total_cost(), 4.0);

        let empty = backtrack(&settled, &"A").expect("empty path must exist");
        assert!(empty.is_empty());
        assert_eq!(*empty.source(), "A");

        assert!(backtrack(&settled, &"X").is_none());
    }
}
