use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;

/// Point on the surface of the Earth given by latitude and longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;
}

/// Geo point that can be constructed from latitude and longitude.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a new point.
    fn latlon(lat: N, lon: N) -> Self;
    /// Creates a new point with the arguments in `x, y` order.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

/// A single geographic position.
///
/// Altitude is carried only so that it can be accepted from the input. Normalization for indexing
/// drops it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Point {
    lat: f64,
    lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<f64>,
}

impl Point {
    /// Creates a 2d point.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            alt: None,
        }
    }

    /// Creates a point with altitude.
    pub fn with_alt(lat: f64, lon: f64, alt: f64) -> Self {
        Self {
            lat,
            lon,
            alt: Some(alt),
        }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Altitude, if the point has one.
    pub fn alt(&self) -> Option<f64> {
        self.alt
    }

    /// Returns the same position without altitude.
    pub fn without_alt(&self) -> Self {
        Self::new(self.lat, self.lon)
    }
}

impl GeoPoint for Point {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for Point {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon)
    }
}

impl CartesianPoint2d for Point {
    type Num = f64;

    fn x(&self) -> f64 {
        self.lon
    }

    fn y(&self) -> f64 {
        self.lat
    }
}

/// Creates a new [`Point`] from latitude and longitude values (in degrees).
///
/// ```
/// use geoprep_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// assert_eq!(point.lon(), 52.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::Point::new($lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn altitude_is_optional() {
        let point = Point::with_alt(10.0, 20.0, 300.0);
        assert_eq!(point.alt(), Some(300.0));
        assert_eq!(point.without_alt(), latlon!(10.0, 20.0));
        assert_eq!(latlon!(10.0, 20.0).alt(), None);
    }

    #[test]
    fn cartesian_axes() {
        let point = Point::lonlat(20.0, 10.0);
        assert_eq!(point.x(), 20.0);
        assert_eq!(point.y(), 10.0);
    }

    #[test]
    fn serialization_skips_missing_altitude() {
        let json = serde_json::to_string(&latlon!(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"lat":1.0,"lon":2.0}"#);

        let point: Point = serde_json::from_str(r#"{"lat":1.0,"lon":2.0,"alt":3.0}"#).unwrap();
        assert_eq!(point.alt(), Some(3.0));
    }
}
