//! See documentation for [`GeometryType`].
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Kind of a [`Geometry`](crate::Geometry) value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryType {
    /// Single position.
    Point,
    /// Set of positions.
    MultiPoint,
    /// Open or closed line.
    LineString,
    /// Set of lines.
    MultiLineString,
    /// Closed line, valid only as a part of a polygon.
    LinearRing,
    /// Polygon with optional holes.
    Polygon,
    /// Set of polygons.
    MultiPolygon,
    /// Axis-aligned rectangle.
    Envelope,
    /// Circle given by center and radius.
    Circle,
    /// Heterogeneous set of geometries.
    GeometryCollection,
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::LinearRing => "LinearRing",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::Envelope => "Envelope",
            GeometryType::Circle => "Circle",
            GeometryType::GeometryCollection => "GeometryCollection",
        };
        write!(f, "{name}")
    }
}
