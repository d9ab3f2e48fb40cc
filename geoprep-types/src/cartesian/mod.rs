//! Planar view of geographic coordinates (`x` is longitude, `y` is latitude).
//!
//! Dateline handling works on longitude/latitude as if they were plane coordinates, so the
//! orientation predicates are expressed over [`CartesianPoint2d`].

mod orient;
mod point;
mod winding;

pub use orient::Orientation;
pub use point::CartesianPoint2d;
pub use winding::{area_signed, Winding};
