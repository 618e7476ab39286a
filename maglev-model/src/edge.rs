//! Directed weighted edges.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::errors::{EdgeError, Result};
use crate::reversal::ReversedProvider;

/// A directed connection between two nodes with a non-negative cost.
pub trait Edge<N> {
    fn cost(&self) -> f64;

    fn source(&self) -> &N;

    fn destination(&self) -> &N;
}

impl<N, E: Edge<N> + ?Sized> Edge<N> for &E {
    fn cost(&self) -> f64 {
        (**self).cost()
    }

    fn source(&self) -> &N {
        (**self).source()
    }

    fn destination(&self) -> &N {
        (**self).destination()
    }
}

impl<N, E: Edge<N> + ?Sized> Edge<N> for Rc<E> {
    fn cost(&self) -> f64 {
        (**self).cost()
    }

    fn source(&self) -> &N {
        (**self).source()
    }

    fn destination(&self) -> &N {
        (**self).destination()
    }
}

/// Edge which can be reversed implicitly in O(1).
///
/// Once a reversal provider is attached, every read of `source()` or
/// `destination()` asks the provider whether the edge is reversed right now
/// and swaps the two endpoints if so. The stored endpoints never change.
/// Without a provider the edge is never reversed.
///
/// Equality and hashing use the stored endpoints and the cost, so an edge
/// compares equal to itself regardless of the reversal state.
#[derive(Clone)]
pub struct BasicEdge<N> {
    source: N,
    destination: N,
    cost: f64,
    reversed: Option<Rc<dyn ReversedProvider>>,
}

impl<N> BasicEdge<N> {
    pub fn new(source: N, destination: N, cost: f64) -> Result<Self> {
        if !cost.is_finite() {
            return Err(EdgeError::NonFiniteCost(cost));
        }
        if cost < 0.0 {
            return Err(EdgeError::NegativeCost(cost));
        }
        Ok(BasicEdge {
            source,
            destination,
            // Turns a negative zero into a positive one, keeps `Hash` consistent with `Eq`
            cost: cost + 0.0,
            reversed: None,
        })
    }

    /// Binds the edge to a reversal flag, replacing any previously attached one.
    pub fn attach_reversal_source(&mut self, provider: Rc<dyn ReversedProvider>) {
        self.reversed = Some(provider);
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed.as_ref().map_or(false, |p| p.is_reversed())
    }
}

impl<N> Edge<N> for BasicEdge<N> {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn source(&self) -> &N {
        if self.is_reversed() {
            &self.destination
        } else {
            &self.source
        }
    }

    fn destination(&self) -> &N {
        if self.is_reversed() {
            &self.source
        } else {
            &self.destination
        }
    }
}

impl<N: PartialEq> PartialEq for BasicEdge<N> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.destination == other.destination && self.cost == other.cost
    }
}

// Cost is never NaN, see `BasicEdge::new()`
impl<N: Eq> Eq for BasicEdge<N> {}

impl<N: Hash> Hash for BasicEdge<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destination.hash(state);
        self.cost.to_bits().hash(state);
    }
}

impl<N: fmt::Display> fmt::Display for BasicEdge<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -({})-> {}", self.source(), self.cost, self.destination())
    }
}

impl<N: fmt::Debug> fmt::Debug for BasicEdge<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BasicEdge")
            .field("source", self.source())
            .field("destination", self.destination())
            .field("cost", &self.cost)
            .field("reversed", &self.is_reversed())
            .finish()
    }
}
