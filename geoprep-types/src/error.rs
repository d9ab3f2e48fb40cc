//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoprepTypesError {
    /// Geometry cannot be constructed from the given coordinates.
    #[error("invalid input geometry: {0}")]
    InvalidGeometry(String),
    /// Geometry has no counterpart in the target geometry model.
    #[error("geometry cannot be converted: {0}")]
    Conversion(String),
}
