//! Error types for the decomposition routines

use thiserror::Error;

/// Failures of matrix operations whose precondition was violated
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The matrix has an exactly zero determinant
    #[error("Matrix is singular (determinant is {det})")]
    SingularMatrix { det: f32 },

    /// Gauss-Jordan elimination met a zero on the diagonal
    #[error("Zero pivot at row {row} during Gauss-Jordan elimination")]
    ZeroPivot { row: usize },
}

/// Result type for math operations
pub type Result<T> = std::result::Result<T, MathError>;
