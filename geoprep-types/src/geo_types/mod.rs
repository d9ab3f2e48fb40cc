//! Conversions between this crate's geometries and [`geo_types`].
//!
//! Latitude maps to `y` and longitude to `x`. Conversions into this crate validate the same way
//! the constructors do, so they are fallible for everything but points.

use geo_types::{coord, Coord, LineString};

use crate::error::GeoprepTypesError;
use crate::{
    Geometry, GeometryCollection, Line, LinearRing, MultiLine, MultiPoint, MultiPolygon, Point,
    Polygon, Rectangle,
};

impl From<Coord<f64>> for Point {
    fn from(value: Coord<f64>) -> Self {
        Point::new(value.y, value.x)
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(value: geo_types::Point<f64>) -> Self {
        Point::from(value.0)
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(value: Point) -> Self {
        geo_types::Point::new(value.lon(), value.lat())
    }
}

impl TryFrom<&LineString<f64>> for Line {
    type Error = GeoprepTypesError;

    fn try_from(value: &LineString<f64>) -> Result<Self, Self::Error> {
        let (lons, lats) = value.coords().map(|c| (c.x, c.y)).unzip();
        Line::new(lats, lons)
    }
}

impl TryFrom<&LineString<f64>> for LinearRing {
    type Error = GeoprepTypesError;

    fn try_from(value: &LineString<f64>) -> Result<Self, Self::Error> {
        LinearRing::try_from(Line::try_from(value)?)
    }
}

impl TryFrom<&geo_types::Polygon<f64>> for Polygon {
    type Error = GeoprepTypesError;

    fn try_from(value: &geo_types::Polygon<f64>) -> Result<Self, Self::Error> {
        let shell = LinearRing::try_from(value.exterior())?;
        let holes = value
            .interiors()
            .iter()
            .map(LinearRing::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Polygon::new(shell, holes))
    }
}

impl TryFrom<&geo_types::Geometry<f64>> for Geometry {
    type Error = GeoprepTypesError;

    fn try_from(value: &geo_types::Geometry<f64>) -> Result<Self, Self::Error> {
        use geo_types::Geometry as G;

        Ok(match value {
            G::Point(p) => Geometry::Point(Point::from(*p)),
            G::Line(l) => Geometry::Line(Line::new(
                vec![l.start.y, l.end.y],
                vec![l.start.x, l.end.x],
            )?),
            G::LineString(ls) => Geometry::Line(Line::try_from(ls)?),
            G::Polygon(p) => Geometry::Polygon(Polygon::try_from(p)?),
            G::MultiPoint(mp) => Geometry::MultiPoint(MultiPoint::from(
                mp.iter().map(|p| Point::from(*p)).collect::<Vec<_>>(),
            )),
            G::MultiLineString(ml) => Geometry::MultiLine(MultiLine::from(
                ml.iter()
                    .map(Line::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            G::MultiPolygon(mp) => Geometry::MultiPolygon(MultiPolygon::from(
                mp.iter()
                    .map(Polygon::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            G::GeometryCollection(gc) => Geometry::GeometryCollection(GeometryCollection::from(
                gc.iter()
                    .map(Geometry::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            G::Rect(r) => Geometry::Rectangle(Rectangle::new(
                r.min().y,
                r.max().y,
                r.min().x,
                r.max().x,
            )?),
            G::Triangle(t) => Geometry::Polygon(Polygon::try_from(&t.to_polygon())?),
        })
    }
}

fn line_string(points: impl Iterator<Item = Point>) -> LineString<f64> {
    LineString::new(points.map(|p| coord!(x: p.lon(), y: p.lat())).collect())
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(value: &Polygon) -> Self {
        geo_types::Polygon::new(
            line_string(value.shell().iter_points()),
            value
                .holes()
                .iter()
                .map(|h| line_string(h.iter_points()))
                .collect(),
        )
    }
}

impl TryFrom<&Geometry> for geo_types::Geometry<f64> {
    type Error = GeoprepTypesError;

    fn try_from(value: &Geometry) -> Result<Self, Self::Error> {
        use geo_types::Geometry as G;

        Ok(match value {
            Geometry::Point(p) => G::Point((*p).into()),
            Geometry::MultiPoint(mp) => G::MultiPoint(geo_types::MultiPoint::new(
                mp.points().iter().map(|p| (*p).into()).collect(),
            )),
            Geometry::Line(l) => G::LineString(line_string(l.iter_points())),
            Geometry::LinearRing(r) => G::LineString(line_string(r.iter_points())),
            Geometry::MultiLine(ml) => G::MultiLineString(geo_types::MultiLineString::new(
                ml.parts().iter().map(|l| line_string(l.iter_points())).collect(),
            )),
            Geometry::Polygon(p) => G::Polygon(p.into()),
            Geometry::MultiPolygon(mp) => G::MultiPolygon(geo_types::MultiPolygon::new(
                mp.parts().iter().map(|p| p.into()).collect(),
            )),
            Geometry::Rectangle(r) => {
                if r.min_lon() > r.max_lon() {
                    return Err(GeoprepTypesError::Conversion(
                        "rectangle crossing the dateline has no geo-types counterpart".into(),
                    ));
                }
                G::Rect(geo_types::Rect::new(
                    coord!(x: r.min_lon(), y: r.min_lat()),
                    coord!(x: r.max_lon(), y: r.max_lat()),
                ))
            }
            Geometry::Circle(_) => {
                return Err(GeoprepTypesError::Conversion(
                    "circle has no geo-types counterpart".into(),
                ))
            }
            Geometry::GeometryCollection(gc) => G::GeometryCollection(
                gc.parts()
                    .iter()
                    .map(geo_types::Geometry::try_from)
                    .collect::<Result<Vec<_>, _>>()?
                    .into_iter()
                    .collect(),
            ),
        })
    }
}
