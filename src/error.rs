//! Error type shared by the GA engine and the TSP problem.
//!
//! The algorithm performs no I/O, so every variant signals either bad input
//! or a broken invariant. Nothing here is retried.

/// Errors raised while configuring or running the solver.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    /// A gene is not a permutation of `0..expected_len`.
    #[error("gene is not a permutation of 0..{expected_len}: {reason}")]
    InvalidPermutation { expected_len: usize, reason: String },

    /// A gene value does not address any city.
    #[error("city index {index} out of range for {num_cities} cities")]
    IndexOutOfRange { index: usize, num_cities: usize },

    /// Input too small or malformed to run the algorithm on.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// A configuration parameter is out of bounds.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;
