//! Error taxonomy shared by matrix construction and the engines.

use thiserror::Error;

/// Errors reported by [`DistanceMatrix`](crate::DistanceMatrix)
/// construction and the solver engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The distance data cannot form a usable matrix: fewer than two
    /// cities, a non-square shape, or a negative or non-finite entry.
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Every swap neighbor of the current tour is tabu, so the search
    /// cannot move. Raised by tabu search when `tabu_size` covers the
    /// whole neighborhood of a small instance.
    #[error("neighborhood exhausted at iteration {iteration}: every swap neighbor is tabu")]
    ExhaustedNeighborhood {
        /// Zero-based iteration at which the search stalled.
        iteration: usize,
    },
}

impl Error {
    pub(crate) fn invalid_matrix(msg: impl Into<String>) -> Self {
        Error::InvalidMatrix(msg.into())
    }

    pub(crate) fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }
}
