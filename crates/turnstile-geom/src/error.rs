//! Error types for the geometry engine

use thiserror::Error;

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors that can occur while deriving a rotation
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The three axis-defining points are collinear, so no plane normal
    /// (and therefore no rotation axis) exists.
    #[error("degenerate geometry: the three axis points are collinear")]
    DegenerateGeometry,
}
