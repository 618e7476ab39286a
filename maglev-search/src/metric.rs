//! Distance estimates used for goal directed search.

/// Estimates the shortest path cost between two nodes.
///
/// To be used as an A* heuristic the estimate must never be greater than the
/// actual cost, and must satisfy the triangle inequality along every edge.
pub trait Metric<N> {
    fn distance(&self, from: &N, to: &N) -> f64;
}

impl<N, F> Metric<N> for F
where
    F: Fn(&N, &N) -> f64,
{
    fn distance(&self, from: &N, to: &N) -> f64 {
        self(from, to)
    }
}
