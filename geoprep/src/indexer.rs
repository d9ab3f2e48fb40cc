//! Entry point for turning geometries into index fields.

use geoprep_types::{Geometry, Line, Point, Polygon, Rectangle};

use crate::config::IndexerOptions;
use crate::error::GeoprepError;
use crate::normalizer::normalize;

/// Geometry that the index can store directly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Primitive<'a> {
    /// Single position.
    Point(&'a Point),
    /// Line that does not cross the dateline.
    Line(&'a Line),
    /// Polygon that does not cross the dateline.
    Polygon(&'a Polygon),
    /// Bounding box.
    Rectangle(&'a Rectangle),
}

/// Conversion of normalized primitives into the fields of a search index.
///
/// This is implemented by the index. The indexer calls it once for every primitive of the
/// normalized geometry.
pub trait IndexFieldBuilder {
    /// Field type of the index.
    type Field;

    /// Creates index fields for the primitive.
    fn build_index_fields(&self, field_name: &str, primitive: Primitive<'_>) -> Vec<Self::Field>;
}

/// Prepares geometries of one field for indexing.
///
/// ```
/// use geoprep::types::{Geometry, Line};
/// use geoprep::{GeoShapeIndexer, IndexerOptions};
///
/// let indexer = GeoShapeIndexer::new("location", IndexerOptions::default());
/// let line = Line::new(vec![0.0, 0.0], vec![170.0, 190.0]).unwrap();
///
/// let Geometry::MultiLine(parts) = indexer.prepare_for_indexing(&line.into()).unwrap() else {
///     panic!("line crossing the dateline must be split");
/// };
/// assert_eq!(parts.parts()[0].lons(), &[170.0, 180.0]);
/// assert_eq!(parts.parts()[1].lons(), &[-180.0, -170.0]);
/// ```
#[derive(Debug, Clone)]
pub struct GeoShapeIndexer {
    field_name: String,
    options: IndexerOptions,
}

impl GeoShapeIndexer {
    /// Creates a new indexer for the field.
    pub fn new(field_name: impl Into<String>, options: IndexerOptions) -> Self {
        Self {
            field_name: field_name.into(),
            options,
        }
    }

    /// Name of the indexed field.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Options of the indexer.
    pub fn options(&self) -> &IndexerOptions {
        &self.options
    }

    /// Splits the geometry at the dateline and fixes the winding of its polygons.
    ///
    /// The result consists of points, lines, polygons and rectangles only, possibly wrapped into
    /// multi geometries or a geometry collection. Circles and bare linear rings are rejected.
    pub fn prepare_for_indexing(&self, geometry: &Geometry) -> Result<Geometry, GeoprepError> {
        normalize(geometry, self.options.orientation)
    }

    /// Creates index fields for an already prepared geometry.
    pub fn index_shape<B: IndexFieldBuilder>(
        &self,
        geometry: &Geometry,
        builder: &B,
    ) -> Result<Vec<B::Field>, GeoprepError> {
        let mut fields = vec![];
        self.collect_fields(geometry, builder, &mut fields)?;
        Ok(fields)
    }

    /// Prepares the geometry and creates index fields for it.
    pub fn index<B: IndexFieldBuilder>(
        &self,
        geometry: &Geometry,
        builder: &B,
    ) -> Result<Vec<B::Field>, GeoprepError> {
        let prepared = self.prepare_for_indexing(geometry)?;
        self.index_shape(&prepared, builder)
    }

    fn collect_fields<B: IndexFieldBuilder>(
        &self,
        geometry: &Geometry,
        builder: &B,
        fields: &mut Vec<B::Field>,
    ) -> Result<(), GeoprepError> {
        let mut add = |primitive| {
            fields.extend(builder.build_index_fields(&self.field_name, primitive));
        };

        match geometry {
            Geometry::Point(point) => add(Primitive::Point(point)),
            Geometry::MultiPoint(points) => points
                .points()
                .iter()
                .for_each(|p| add(Primitive::Point(p))),
            Geometry::Line(line) => add(Primitive::Line(line)),
            Geometry::MultiLine(lines) => lines
                .parts()
                .iter()
                .for_each(|l| add(Primitive::Line(l))),
            Geometry::Polygon(polygon) => add(Primitive::Polygon(polygon)),
            Geometry::MultiPolygon(polygons) => polygons
                .parts()
                .iter()
                .for_each(|p| add(Primitive::Polygon(p))),
            Geometry::Rectangle(rectangle) => add(Primitive::Rectangle(rectangle)),
            Geometry::GeometryCollection(collection) => {
                for part in collection.parts() {
                    self.collect_fields(part, builder, fields)?;
                }
            }
            Geometry::Circle(_) | Geometry::LinearRing(_) => {
                return Err(GeoprepError::UnsupportedGeometry(geometry.geometry_type()))
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geoprep_types::{latlon, Circle, GeometryType};

    use super::*;
    use crate::config::Orientation;

    struct Names;

    impl IndexFieldBuilder for Names {
        type Field = String;

        fn build_index_fields(&self, field_name: &str, primitive: Primitive<'_>) -> Vec<String> {
            let kind = match primitive {
                Primitive::Point(_) => "point",
                Primitive::Line(_) => "line",
                Primitive::Polygon(_) => "polygon",
                Primitive::Rectangle(_) => "rectangle",
            };
            vec![format!("{field_name}:{kind}")]
        }
    }

    #[test]
    fn indexer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeoShapeIndexer>();
    }

    #[test]
    fn one_call_per_primitive() {
        let indexer = GeoShapeIndexer::new("geo", IndexerOptions::default());
        let line = Line::new(vec![0.0, 0.0], vec![170.0, 190.0]).unwrap();
        let geometry = Geometry::GeometryCollection(
            vec![
                Geometry::Point(latlon!(1.0, 1.0)),
                Geometry::Line(line),
                Geometry::Rectangle(Rectangle::new(0.0, 1.0, 0.0, 1.0).unwrap()),
            ]
            .into(),
        );

        assert_eq!(
            indexer.index(&geometry, &Names).unwrap(),
            vec!["geo:point", "geo:line", "geo:line", "geo:rectangle"]
        );
    }

    #[test]
    fn unprepared_circle_is_rejected() {
        let indexer = GeoShapeIndexer::new(
            "geo",
            IndexerOptions::default().with_orientation(Orientation::Left),
        );
        let circle = Geometry::Circle(Circle::new(latlon!(0.0, 0.0), 1.0).unwrap());

        assert_matches!(
            indexer.index_shape(&circle, &Names),
            Err(GeoprepError::UnsupportedGeometry(GeometryType::Circle))
        );
        assert_eq!(indexer.field_name(), "geo");
        assert_eq!(indexer.options().orientation, Orientation::Left);
    }
}
