//! Label-setting shortest path search.
//!
//! One search loop (Dijkstra's) serves every variant: A* and ALT only plug
//! a different `SearchPolicy` into it. Stale frontier entries are skipped
//! lazily instead of decreasing keys, and settled nodes are never reopened,
//! which is why estimates have to be admissible and monotone.
//!
//! A single search is synchronous and keeps all of its state local to the
//! call. Graphs are only read.

pub use self::alt::{Alt, AltSearch, LandmarkMetric};
pub use self::computation::ShortestPathComputation;
pub use self::dijkstra::{AStarSearch, Dijkstra, Settled, ShortestPathSearch};
pub use self::distance::TentativeDistance;
pub use self::landmarks::{GreedyFarthestLandmarks, LandmarkProvider, RandomLandmarks};
pub use self::metric::Metric;
pub use self::policy::{AStar, CostLimit, Deadline, SearchPolicy, Unguided};

mod alt;
mod backtrack;
mod computation;
mod dijkstra;
mod distance;
mod frontier;
mod landmarks;
mod metric;
mod numtraits;
mod policy;
