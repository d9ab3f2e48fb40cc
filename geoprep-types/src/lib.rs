//! Geometry model for the `geoprep` shape normalizer.
//!
//! All geometries use geographic coordinates in degrees. Internally lines and rings store their
//! coordinates as parallel latitude/longitude arrays, which is the form the dateline decomposition
//! works with.
//!
//! The types here only validate structure (array lengths, ring closure, rectangle bounds). Whether
//! a geometry can be indexed as is, or has to be split at the antimeridian first, is decided by the
//! `geoprep` crate.
//!
//! ```
//! use geoprep_types::{latlon, Geometry, GeometryType, Line};
//!
//! let line = Line::new(vec![0.0, 1.0], vec![170.0, 190.0]).unwrap();
//! let geometry = Geometry::from(line);
//! assert_eq!(geometry.geometry_type(), GeometryType::LineString);
//!
//! let point = latlon!(38.0, 52.0);
//! assert_eq!(point.lat(), 38.0);
//! ```

pub mod cartesian;
pub mod error;
mod geometry;
mod geometry_type;
mod line;
mod multi_line;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod rectangle;

#[cfg(feature = "geo-types")]
pub mod geo_types;

pub use geometry::{Circle, Geometry, GeometryCollection};
pub use geometry_type::GeometryType;
pub use line::{Line, LinearRing};
pub use multi_line::MultiLine;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::{GeoPoint, NewGeoPoint, Point};
pub use polygon::Polygon;
pub use rectangle::Rectangle;
