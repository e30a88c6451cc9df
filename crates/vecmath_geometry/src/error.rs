//! Error types for intersection queries

use thiserror::Error;

/// Geometry errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A tolerance is negative, NaN or infinite
    #[error("Invalid tolerance {name}: {value}")]
    InvalidTolerance { name: &'static str, value: f32 },
}

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;
