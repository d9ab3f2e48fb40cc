//! Error types used by the crate.

use geoprep_types::error::GeoprepTypesError;
use geoprep_types::GeometryType;
use thiserror::Error;

/// Geoprep error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoprepError {
    /// The geometry kind cannot be indexed.
    #[error("invalid shape type found [{0}] while indexing shape")]
    UnsupportedGeometry(GeometryType),
    /// The geometry is structurally valid, but cannot be prepared for indexing.
    #[error("invalid shape: {0}")]
    InvalidShape(#[from] InvalidShapeError),
    /// A normalized geometry could not be constructed.
    #[error(transparent)]
    Types(#[from] GeoprepTypesError),
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Reasons a polygon or a line is rejected by the decomposition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidShapeError {
    /// Two directly connected vertices are equal.
    #[error("provided shape has duplicate consecutive coordinates at: ({lon}, {lat})")]
    DuplicateConsecutiveCoordinates {
        /// Latitude of the repeated vertex.
        lat: f64,
        /// Longitude of the repeated vertex.
        lon: f64,
    },
    /// A hole touches the shell in more than one point.
    #[error("interior cannot share more than one point with the exterior")]
    HoleSharesTooManyPointsWithShell,
    /// The edges adjacent to the southernmost vertex of a ring coincide.
    #[error("cannot determine orientation: edges adjacent to ({lon}, {lat}) coincide")]
    UndecidableOrientation {
        /// Latitude of the southernmost vertex.
        lat: f64,
        /// Longitude of the southernmost vertex.
        lon: f64,
    },
    /// A hole does not lie inside any of the shell components.
    #[error("hole is not within polygon")]
    HoleNotWithinPolygon,
    /// A ring does not close after splitting.
    #[error("self-intersection at or near point [{lon}, {lat}]")]
    SelfIntersection {
        /// Latitude of the point where the ring touches itself.
        lat: f64,
        /// Longitude of the point where the ring touches itself.
        lon: f64,
    },
}
