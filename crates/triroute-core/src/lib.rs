//! Multi-criteria all-pairs shortest route computation.
//!
//! Given three per-criterion edge-weight matrices (time, cost, risk) over the
//! same directed graph and a non-negative weight triple, the crate combines
//! them into a single scalar-weighted adjacency matrix, solves all-pairs
//! shortest paths with path reconstruction, and replays each route over the
//! original matrices to recover per-criterion totals.

pub mod analysis;
pub mod combine;
pub mod engine;
pub mod error;
pub mod export;
pub mod matrix;
pub mod metrics;
pub mod weights;

pub use analysis::{Analysis, PairReport, RouteOutcome};
pub use combine::combine;
pub use engine::RouteTable;
pub use error::{Result, RouteError};
pub use export::combined_to_dot;
pub use matrix::{CriterionSet, SquareMatrix};
pub use metrics::PathTotals;
pub use weights::{RawWeights, Weights};
