//! Error types shared across the crate

use thiserror::Error;

/// Errors raised while constructing a [`SecureBox`](crate::SecureBox)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoxError {
    #[error("Invalid box dimensions: {y_size}x{x_size} (both must be at least 1)")]
    InvalidDimensions { y_size: usize, x_size: usize },
    #[error("Box state has no cells")]
    EmptyState,
    #[error("Jagged box state: row {row} has {actual} cells, expected {expected}")]
    JaggedState {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised while planning an unlock or solving its GF(2) system
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Right-hand side has {actual} entries, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("System is inconsistent: reduced row {row} reads 0 = 1")]
    Inconsistent { row: usize },
    #[error("Jagged box state: row {row} has {actual} cells, expected {expected}")]
    JaggedState {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
