use serde::{Deserialize, Serialize};

use crate::error::GeoprepTypesError;

/// Axis-aligned bounding box in geographic coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "RawRectangle")]
pub struct Rectangle {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl Rectangle {
    /// Creates a new rectangle.
    ///
    /// Fails if `max_lat` is less than `min_lat`.
    pub fn new(
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Result<Self, GeoprepTypesError> {
        if max_lat < min_lat {
            return Err(GeoprepTypesError::InvalidGeometry(format!(
                "max lat {max_lat} cannot be less than min lat {min_lat}"
            )));
        }

        Ok(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }

    /// Southern boundary.
    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    /// Northern boundary.
    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    /// Western boundary.
    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    /// Eastern boundary.
    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    /// Extent along the meridians, in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

#[derive(Deserialize)]
struct RawRectangle {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl TryFrom<RawRectangle> for Rectangle {
    type Error = GeoprepTypesError;

    fn try_from(raw: RawRectangle) -> Result<Self, Self::Error> {
        Rectangle::new(raw.min_lat, raw.max_lat, raw.min_lon, raw.max_lon)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn inverted_latitudes_are_rejected() {
        assert_matches!(
            Rectangle::new(10.0, -10.0, 0.0, 1.0),
            Err(GeoprepTypesError::InvalidGeometry(_))
        );
    }

    #[test]
    fn longitudes_may_wrap() {
        let rect = Rectangle::new(-10.0, 10.0, 170.0, -170.0).unwrap();
        assert_eq!(rect.min_lon(), 170.0);
        assert_eq!(rect.max_lon(), -170.0);
        assert_eq!(rect.height(), 20.0);
    }
}
