use serde::{Deserialize, Serialize};

use crate::line::LinearRing;

/// Polygon geometry. Polygon consists of one shell, and zero or more holes.
///
/// Holes are expected to lie inside the shell and to touch it in at most one point.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Polygon {
    shell: LinearRing,
    #[serde(default)]
    holes: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(shell: LinearRing, holes: Vec<LinearRing>) -> Self {
        Self { shell, holes }
    }

    /// Outer ring of the polygon.
    pub fn shell(&self) -> &LinearRing {
        &self.shell
    }

    /// Inner rings of the polygon.
    pub fn holes(&self) -> &[LinearRing] {
        &self.holes
    }

    /// Number of holes.
    pub fn num_holes(&self) -> usize {
        self.holes.len()
    }

    /// Returns the hole at `index`.
    pub fn hole(&self, index: usize) -> &LinearRing {
        &self.holes[index]
    }

    /// Iterates over all rings of the polygon starting with the shell.
    pub fn iter_rings(&self) -> impl Iterator<Item = &LinearRing> {
        std::iter::once(&self.shell).chain(self.holes.iter())
    }
}

impl From<LinearRing> for Polygon {
    fn from(shell: LinearRing) -> Self {
        Self {
            shell,
            holes: vec![],
        }
    }
}
