//! Splitting of lines and polygons at the dateline.
//!
//! Both kinds of geometries are treated as planar figures with longitude as `x` and latitude as `y`.
//! A figure is cut along the meridians `180` and `-180`, and every part is moved back into the
//! `[-180, 180]` longitude range. Polygons additionally have their rings rewound to the requested
//! handedness.

mod assemble;
mod dateline;
mod edge;
mod intersect;
mod line;
mod polygon;
mod ring;

pub(crate) use line::decompose_line;
pub(crate) use polygon::decompose_polygon;

/// Longitude of the antimeridian.
pub(crate) const DATELINE: f64 = 180.0;
