//! Error types for route analysis inputs

use thiserror::Error;

/// Result type for core route operations
pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors that can occur while validating analysis inputs
///
/// All variants are fatal and reported before any computation starts; an
/// unreachable node pair is a normal result, not an error.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Matrix rows/columns do not form a square of the expected size
    #[error("Matrix for '{criterion}' is not square: row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        criterion: &'static str,
        row: usize,
        found: usize,
        expected: usize,
    },

    /// The three criterion matrices disagree on node count
    #[error("Criterion matrices differ in size: time is {time}x{time}, cost is {cost}x{cost}, risk is {risk}x{risk}")]
    DimensionMismatch {
        time: usize,
        cost: usize,
        risk: usize,
    },

    /// Label list does not match the matrix dimension, or labels repeat
    #[error("Node labels are invalid: {message}")]
    LabelMismatch { message: String },

    /// A matrix entry is negative or a diagonal entry is non-zero
    #[error("Matrix for '{criterion}' has an invalid entry at ({row}, {col}): {message}")]
    InvalidEntry {
        criterion: &'static str,
        row: usize,
        col: usize,
        message: String,
    },

    /// Weight triple cannot be normalized
    #[error("Invalid criterion weights (time={time}, cost={cost}, risk={risk}): {message}")]
    InvalidWeights {
        time: f64,
        cost: f64,
        risk: f64,
        message: String,
    },
}
