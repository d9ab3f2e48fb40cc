//! Indexer configuration.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoprepError;

/// Winding convention of polygon shells.
///
/// Holes always use the opposite winding of the shell they belong to.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Orientation {
    /// Right hand rule: shells are counterclockwise.
    #[default]
    Right,
    /// Left hand rule: shells are clockwise.
    Left,
}

impl Orientation {
    /// Returns true for the right hand rule.
    pub fn is_right_handed(&self) -> bool {
        matches!(self, Self::Right)
    }
}

impl FromStr for Orientation {
    type Err = GeoprepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "right" | "ccw" | "counterclockwise" => Ok(Self::Right),
            "left" | "cw" | "clockwise" => Ok(Self::Left),
            _ => Err(GeoprepError::InvalidConfig(format!(
                "unknown orientation [{s}]"
            ))),
        }
    }
}

impl TryFrom<String> for Orientation {
    type Error = GeoprepError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Right => write!(f, "right"),
            Self::Left => write!(f, "left"),
        }
    }
}

/// Options of a [`GeoShapeIndexer`](crate::GeoShapeIndexer).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerOptions {
    /// Winding convention applied to polygons.
    pub orientation: Orientation,
}

impl IndexerOptions {
    /// Sets the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_aliases() {
        for name in ["right", "CCW", "counterClockwise"] {
            assert_eq!(name.parse::<Orientation>().unwrap(), Orientation::Right);
        }
        for name in ["LEFT", "cw", "clockwise"] {
            assert_eq!(name.parse::<Orientation>().unwrap(), Orientation::Left);
        }
        assert_matches!(
            "sideways".parse::<Orientation>(),
            Err(GeoprepError::InvalidConfig(_))
        );
    }

    #[test]
    fn options_from_json() {
        let options: IndexerOptions = serde_json::from_str(r#"{"orientation":"CW"}"#).unwrap();
        assert_eq!(options.orientation, Orientation::Left);
        assert!(!options.orientation.is_right_handed());

        let options: IndexerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, IndexerOptions::default());
        assert!(options.orientation.is_right_handed());

        assert!(serde_json::from_str::<IndexerOptions>(r#"{"orientation":"up"}"#).is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let options = IndexerOptions::default().with_orientation(Orientation::Left);
        assert_eq!(
            serde_json::to_string(&options).unwrap(),
            r#"{"orientation":"left"}"#
        );
    }
}
