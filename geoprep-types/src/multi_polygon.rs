use serde::{Deserialize, Serialize};

use crate::polygon::Polygon;

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPolygon {
    /// Inner polygons.
    pub parts: Vec<Polygon>,
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(parts: Vec<Polygon>) -> Self {
        Self { parts }
    }
}

impl MultiPolygon {
    /// Returns reference to the inner polygons.
    pub fn parts(&self) -> &[Polygon] {
        &self.parts
    }

    /// Number of polygons.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the set has no polygons.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
