//! Geoprep prepares geographic geometries for a spatial search index.
//!
//! Index structures work on planar primitives and cannot handle shapes that cross the
//! antimeridian (the ±180° meridian, "dateline"), rings wound in an arbitrary direction or
//! coordinates outside of the canonical ranges. This crate rewrites arbitrary user geometries into
//! ones that satisfy these constraints:
//!
//! * points are wrapped into `[-90, 90]` latitude and `(-180, 180]` longitude, altitude is dropped;
//! * lines are cut at every crossing of the dateline, each part staying on one side of it;
//! * polygons are cut along the dateline into several polygons, their shells are rewound to the
//!   configured [`Orientation`], and holes are given to the part they lie in;
//! * collections are processed member by member, and a collection of one member is replaced by
//!   the member.
//!
//! Line segments always take the short way around the globe, so lines from `170` to `190` and from
//! `170` to `-170` both cross the dateline. A polygon shell wound against the configured
//! orientation and spanning more than a hemisphere is taken to be going around the dateline.
//!
//! # Indexing
//!
//! [`GeoShapeIndexer`] combines the preparation with a user supplied [`IndexFieldBuilder`], which
//! converts every prepared primitive into the index's own field type.
//!
//! ```
//! use geoprep::types::{Geometry, LinearRing, Polygon};
//! use geoprep::{GeoShapeIndexer, IndexFieldBuilder, IndexerOptions, Primitive};
//!
//! struct Bbox;
//!
//! impl IndexFieldBuilder for Bbox {
//!     type Field = (f64, f64);
//!
//!     fn build_index_fields(&self, _field: &str, primitive: Primitive<'_>) -> Vec<(f64, f64)> {
//!         match primitive {
//!             Primitive::Polygon(polygon) => {
//!                 let lons = polygon.shell().lons();
//!                 let min = lons.iter().copied().fold(f64::INFINITY, f64::min);
//!                 let max = lons.iter().copied().fold(f64::NEG_INFINITY, f64::max);
//!                 vec![(min, max)]
//!             }
//!             _ => vec![],
//!         }
//!     }
//! }
//!
//! let shell = LinearRing::new(
//!     vec![-10.0, -10.0, 10.0, 10.0, -10.0],
//!     vec![170.0, 190.0, 190.0, 170.0, 170.0],
//! )
//! .unwrap();
//! let indexer = GeoShapeIndexer::new("area", IndexerOptions::default());
//! let fields = indexer.index(&Geometry::Polygon(Polygon::from(shell)), &Bbox).unwrap();
//!
//! assert_eq!(fields, vec![(170.0, 180.0), (-180.0, -170.0)]);
//! ```
//!
//! # Logging
//!
//! The crate reports decisions taken while splitting shapes through the [`log`] facade at `debug`
//! and `trace` levels. No logger is installed by the crate.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod config;
mod decompose;
pub mod error;
mod indexer;
mod normalize;
mod normalizer;

pub use config::{IndexerOptions, Orientation};
pub use error::{GeoprepError, InvalidShapeError};
pub use geoprep_types as types;
pub use indexer::{GeoShapeIndexer, IndexFieldBuilder, Primitive};
pub use normalize::{normalize_lat, normalize_lon};
