use serde::{Deserialize, Serialize};

use crate::line::Line;

/// A set of lines.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiLine {
    /// Inner lines.
    pub parts: Vec<Line>,
}

impl From<Vec<Line>> for MultiLine {
    fn from(parts: Vec<Line>) -> Self {
        Self { parts }
    }
}

impl MultiLine {
    /// Returns reference to the inner lines.
    pub fn parts(&self) -> &[Line] {
        &self.parts
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the set has no lines.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
