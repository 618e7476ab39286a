//! Tentative distance records.

use maglev_model::HasPathCost;

/// What a single search run knows about the way to a node.
///
/// A record is never changed once created: when a better way to the node is
/// found, a new record replaces the old one.
#[derive(Clone, PartialEq, Debug)]
pub struct TentativeDistance<N, E> {
    node: N,
    /// Edge the node was reached by, `None` for a source node.
    parent_edge: Option<E>,
    /// Accumulated cost from the closest source.
    tentative_distance: f64,
    /// Lower bound of the remaining cost to the destination, 0 without a heuristic.
    estimated_distance: f64,
}

impl<N, E> TentativeDistance<N, E> {
    pub fn new(node: N, parent_edge: Option<E>, tentative_distance: f64) -> Self {
        Self::with_estimate(node, parent_edge, tentative_distance, 0.0)
    }

    pub fn with_estimate(node: N, parent_edge: Option<E>, tentative_distance: f64, estimated_distance: f64) -> Self {
        TentativeDistance {
            node,
            parent_edge,
            tentative_distance,
            estimated_distance,
        }
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn parent_edge(&self) -> Option<&E> {
        self.parent_edge.as_ref()
    }

    pub fn tentative_distance(&self) -> f64 {
        self.tentative_distance
    }

    pub fn estimated_distance(&self) -> f64 {
        self.estimated_distance
    }

    /// Key the frontier orders records by, smallest first.
    pub fn priority(&self) -> f64 {
        self.tentative_distance + self.estimated_distance
    }

    pub fn is_source(&self) -> bool {
        self.parent_edge.is_none()
    }
}

impl<N, E> HasPathCost for TentativeDistance<N, E> {
    fn path_cost(&self) -> f64 {
        self.tentative_distance
    }
}

#[test]
fn test_priority() {
    let source = TentativeDistance::<&str, ()>::new("A", None, 0.0);
    assert!(source.is_source());
    assert_eq!(source.priority(), 0.0);
    assert_eq!(source.estimated_distance(), 0.0);

    let reached = TentativeDistance::with_estimate("B", Some(()), 2.0, 1.5);
    assert!(!reached.is_source());
    assert_eq!(reached.priority(), 3.5);
    assert_eq!(reached.path_cost(), 2.0);
    assert_eq!(*reached.node(), "B");
}
