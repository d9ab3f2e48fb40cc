//! Dispatch of geometry normalization by geometry kind.

use geoprep_types::{
    Geometry, GeometryCollection, Line, MultiLine, MultiPoint, MultiPolygon, Polygon,
};

use crate::config::Orientation;
use crate::decompose::{decompose_line, decompose_polygon};
use crate::error::GeoprepError;
use crate::normalize::normalize_point;

/// Rewrites the geometry into one that only consists of primitives that do not cross the dateline.
///
/// Collections with a single member are replaced by that member.
pub(crate) fn normalize(
    geometry: &Geometry,
    orientation: Orientation,
) -> Result<Geometry, GeoprepError> {
    let right_handed = orientation.is_right_handed();

    Ok(match geometry {
        Geometry::Point(point) => Geometry::Point(normalize_point(point, true, true)),
        Geometry::MultiPoint(multi_point) => match multi_point.points() {
            [] => Geometry::MultiPoint(MultiPoint::default()),
            [point] => Geometry::Point(normalize_point(point, true, true)),
            points => Geometry::MultiPoint(
                points
                    .iter()
                    .map(|p| normalize_point(p, true, true))
                    .collect::<Vec<_>>()
                    .into(),
            ),
        },
        Geometry::Line(line) => lines(decompose_line(line)?),
        Geometry::MultiLine(multi_line) => {
            let mut parts = vec![];
            for line in multi_line.parts() {
                parts.extend(decompose_line(line)?);
            }
            lines(parts)
        }
        Geometry::Polygon(polygon) => polygons(decompose_polygon(polygon, right_handed)?),
        Geometry::MultiPolygon(multi_polygon) => {
            let mut parts = vec![];
            for polygon in multi_polygon.parts() {
                parts.extend(decompose_polygon(polygon, right_handed)?);
            }
            polygons(parts)
        }
        Geometry::Rectangle(rectangle) => Geometry::Rectangle(*rectangle),
        Geometry::GeometryCollection(collection) => {
            let mut parts = Vec::with_capacity(collection.len());
            for part in collection.parts() {
                match normalize(part, orientation)? {
                    Geometry::GeometryCollection(inner) if inner.len() == 1 => {
                        parts.extend(inner.parts().iter().cloned())
                    }
                    normalized => parts.push(normalized),
                }
            }

            if parts.len() == 1 {
                parts.swap_remove(0)
            } else {
                GeometryCollection::from(parts).into()
            }
        }
        Geometry::Circle(_) | Geometry::LinearRing(_) => {
            return Err(GeoprepError::UnsupportedGeometry(geometry.geometry_type()))
        }
    })
}

fn lines(mut parts: Vec<Line>) -> Geometry {
    match parts.len() {
        0 => GeometryCollection::empty().into(),
        1 => parts.swap_remove(0).into(),
        _ => MultiLine::from(parts).into(),
    }
}

fn polygons(mut parts: Vec<Polygon>) -> Geometry {
    match parts.len() {
        0 => GeometryCollection::empty().into(),
        1 => parts.swap_remove(0).into(),
        _ => MultiPolygon::from(parts).into(),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geoprep_types::{latlon, Circle, GeometryType, LinearRing, Point, Rectangle};

    use super::*;

    fn line(coords: &[(f64, f64)]) -> Line {
        let (lons, lats) = coords.iter().copied().unzip();
        Line::new(lats, lons).unwrap()
    }

    #[test]
    fn point_drops_altitude() {
        let geometry = Geometry::Point(Point::with_alt(10.0, 200.0, 5.0));
        assert_eq!(
            normalize(&geometry, Orientation::Right).unwrap(),
            Geometry::Point(latlon!(10.0, -160.0))
        );
    }

    #[test]
    fn rectangle_is_unchanged() {
        let geometry = Geometry::Rectangle(Rectangle::new(-10.0, 10.0, 170.0, -170.0).unwrap());
        assert_eq!(normalize(&geometry, Orientation::Right).unwrap(), geometry);
    }

    #[test]
    fn single_member_collections_collapse() {
        let geometry = Geometry::MultiPoint(vec![latlon!(1.0, 2.0)].into());
        assert_eq!(
            normalize(&geometry, Orientation::Right).unwrap(),
            Geometry::Point(latlon!(1.0, 2.0))
        );

        let source = line(&[(0.0, 0.0), (1.0, 1.0)]);
        let geometry = Geometry::MultiLine(vec![source.clone()].into());
        assert_eq!(
            normalize(&geometry, Orientation::Right).unwrap(),
            Geometry::Line(source.clone())
        );

        let geometry = Geometry::GeometryCollection(vec![Geometry::Line(source.clone())].into());
        assert_eq!(
            normalize(&geometry, Orientation::Right).unwrap(),
            Geometry::Line(source)
        );
    }

    #[test]
    fn empty_collections() {
        let geometry = Geometry::MultiPoint(MultiPoint::default());
        assert_eq!(normalize(&geometry, Orientation::Right).unwrap(), geometry);

        let geometry = Geometry::MultiLine(MultiLine::default());
        assert_eq!(
            normalize(&geometry, Orientation::Right).unwrap(),
            Geometry::GeometryCollection(GeometryCollection::empty())
        );

        let geometry = Geometry::GeometryCollection(GeometryCollection::empty());
        assert_eq!(normalize(&geometry, Orientation::Right).unwrap(), geometry);
    }

    #[test]
    fn crossing_line_becomes_multi_line() {
        let geometry = Geometry::Line(line(&[(170.0, 0.0), (190.0, 0.0)]));
        assert_matches!(
            normalize(&geometry, Orientation::Right).unwrap(),
            Geometry::MultiLine(lines) if lines.len() == 2
        );
    }

    #[test]
    fn multi_line_gathers_all_parts() {
        let geometry = Geometry::MultiLine(
            vec![
                line(&[(170.0, 0.0), (190.0, 0.0)]),
                line(&[(0.0, 0.0), (10.0, 0.0)]),
            ]
            .into(),
        );
        let Geometry::MultiLine(lines) = normalize(&geometry, Orientation::Right).unwrap() else {
            panic!("expected a multi line");
        };
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.parts()[2].lons(), &[0.0, 10.0]);
    }

    #[test]
    fn nested_collection() {
        let geometry = Geometry::GeometryCollection(
            vec![
                Geometry::Point(latlon!(0.0, 0.0)),
                Geometry::GeometryCollection(vec![Geometry::Point(latlon!(1.0, 1.0))].into()),
            ]
            .into(),
        );
        assert_eq!(
            normalize(&geometry, Orientation::Right).unwrap(),
            Geometry::GeometryCollection(
                vec![
                    Geometry::Point(latlon!(0.0, 0.0)),
                    Geometry::Point(latlon!(1.0, 1.0)),
                ]
                .into()
            )
        );
    }

    #[test]
    fn unsupported() {
        let circle = Geometry::Circle(Circle::new(latlon!(0.0, 0.0), 10.0).unwrap());
        assert_matches!(
            normalize(&circle, Orientation::Right),
            Err(GeoprepError::UnsupportedGeometry(GeometryType::Circle))
        );

        let ring = LinearRing::new(vec![0.0, 0.0, 1.0, 0.0], vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_matches!(
            normalize(&Geometry::LinearRing(ring.clone()), Orientation::Right),
            Err(GeoprepError::UnsupportedGeometry(GeometryType::LinearRing))
        );

        let collection =
            Geometry::GeometryCollection(vec![Geometry::LinearRing(ring)].into());
        assert_matches!(
            normalize(&collection, Orientation::Right),
            Err(GeoprepError::UnsupportedGeometry(GeometryType::LinearRing))
        );
    }
}
