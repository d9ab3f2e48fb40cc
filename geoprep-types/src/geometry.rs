use serde::{Deserialize, Serialize};

use crate::error::GeoprepTypesError;
use crate::geometry_type::GeometryType;
use crate::line::{Line, LinearRing};
use crate::multi_line::MultiLine;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::rectangle::Rectangle;

/// Any geometry the normalizer accepts.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geometry {
    /// Single position.
    Point(Point),
    /// Set of positions.
    MultiPoint(MultiPoint),
    /// Line string.
    Line(Line),
    /// Set of line strings.
    MultiLine(MultiLine),
    /// Bare closed ring.
    LinearRing(LinearRing),
    /// Polygon with holes.
    Polygon(Polygon),
    /// Set of polygons.
    MultiPolygon(MultiPolygon),
    /// Bounding box.
    Rectangle(Rectangle),
    /// Circle.
    Circle(Circle),
    /// Heterogeneous collection.
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Kind of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::Line(_) => GeometryType::LineString,
            Geometry::MultiLine(_) => GeometryType::MultiLineString,
            Geometry::LinearRing(_) => GeometryType::LinearRing,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::Rectangle(_) => GeometryType::Envelope,
            Geometry::Circle(_) => GeometryType::Circle,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Returns true for empty collections.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::MultiPoint(v) => v.is_empty(),
            Geometry::MultiLine(v) => v.is_empty(),
            Geometry::MultiPolygon(v) => v.is_empty(),
            Geometry::GeometryCollection(v) => v.is_empty(),
            _ => false,
        }
    }
}

/// Circle given by its center and radius in meters.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
pub struct Circle {
    center: Point,
    radius_meters: f64,
}

impl Circle {
    /// Creates a new circle. The radius must not be negative.
    pub fn new(center: Point, radius_meters: f64) -> Result<Self, GeoprepTypesError> {
        if radius_meters.is_nan() || radius_meters < 0.0 {
            return Err(GeoprepTypesError::InvalidGeometry(format!(
                "circle radius {radius_meters} must not be negative"
            )));
        }

        Ok(Self {
            center,
            radius_meters,
        })
    }

    /// Center of the circle.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius in meters.
    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }
}

/// Collection of geometries of any kind.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GeometryCollection {
    /// Member geometries.
    pub parts: Vec<Geometry>,
}

impl GeometryCollection {
    /// Creates an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns reference to the member geometries.
    pub fn parts(&self) -> &[Geometry] {
        &self.parts
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl From<Vec<Geometry>> for GeometryCollection {
    fn from(parts: Vec<Geometry>) -> Self {
        Self { parts }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<Line> for Geometry {
    fn from(value: Line) -> Self {
        Self::Line(value)
    }
}

impl From<MultiLine> for Geometry {
    fn from(value: MultiLine) -> Self {
        Self::MultiLine(value)
    }
}

impl From<LinearRing> for Geometry {
    fn from(value: LinearRing) -> Self {
        Self::LinearRing(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<Rectangle> for Geometry {
    fn from(value: Rectangle) -> Self {
        Self::Rectangle(value)
    }
}

impl From<Circle> for Geometry {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::latlon;

    #[test]
    fn geometry_type_names() {
        let ring = LinearRing::new(vec![0.0, 0.0, 1.0, 0.0], vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(
            Geometry::from(ring).geometry_type().to_string(),
            "LinearRing"
        );
        assert_eq!(
            Geometry::from(Rectangle::new(0.0, 1.0, 0.0, 1.0).unwrap())
                .geometry_type()
                .to_string(),
            "Envelope"
        );
    }

    #[test]
    fn empty_collections() {
        assert!(Geometry::from(GeometryCollection::empty()).is_empty());
        assert!(Geometry::from(MultiPoint::default()).is_empty());
        assert!(!Geometry::from(latlon!(0.0, 0.0)).is_empty());
    }

    #[test]
    fn circle_radius() {
        assert_matches!(
            Circle::new(latlon!(0.0, 0.0), -1.0),
            Err(GeoprepTypesError::InvalidGeometry(_))
        );
        assert_matches!(
            Circle::new(latlon!(0.0, 0.0), f64::NAN),
            Err(GeoprepTypesError::InvalidGeometry(_))
        );
        let circle = Circle::new(latlon!(1.0, 2.0), 10.0).unwrap();
        assert_eq!(circle.center(), latlon!(1.0, 2.0));
        assert_eq!(circle.radius_meters(), 10.0);
    }

    #[test]
    fn serde_round_trip_keeps_variant() {
        let geometry = Geometry::from(Line::new(vec![0.0, 1.0], vec![2.0, 3.0]).unwrap());
        let json = serde_json::to_string(&geometry).unwrap();
        assert!(json.starts_with(r#"{"Line":"#));
        let back: Geometry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, geometry);
    }
}
