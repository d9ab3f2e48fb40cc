use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A set of points.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPoint(Vec<Point>);

impl MultiPoint {
    /// Returns reference to the inner points.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(value: Vec<Point>) -> Self {
        Self(value)
    }
}

impl From<MultiPoint> for Vec<Point> {
    fn from(value: MultiPoint) -> Self {
        value.0
    }
}
