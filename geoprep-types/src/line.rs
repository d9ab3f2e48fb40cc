//! Lines and linear rings.
//!
//! A [`Line`] is an ordered sequence of at least two positions. A [`LinearRing`] is a line that
//! closes itself: its first and last positions are exactly the same.
//!
//! # Linear ring vs contour
//!
//! Unlike contours that imply the closing segment, a linear ring repeats its first point at the end,
//! as the OGC Simple Feature Access standard does. A ring with `n` distinct vertices therefore has
//! `n + 1` positions.

use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Winding};
use crate::error::GeoprepTypesError;
use crate::point::{GeoPoint, Point};

/// Line string stored as parallel latitude and longitude arrays.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "RawLine")]
pub struct Line {
    lats: Vec<f64>,
    lons: Vec<f64>,
}

impl Line {
    /// Creates a new line.
    ///
    /// Fails if the arrays have different lengths or contain fewer than 2 positions.
    pub fn new(lats: Vec<f64>, lons: Vec<f64>) -> Result<Self, GeoprepTypesError> {
        if lats.len() != lons.len() {
            return Err(GeoprepTypesError::InvalidGeometry(format!(
                "lats and lons must be equal length, got {} and {}",
                lats.len(),
                lons.len()
            )));
        }
        if lats.len() < 2 {
            return Err(GeoprepTypesError::InvalidGeometry(format!(
                "at least two points in the line is required, got {}",
                lats.len()
            )));
        }

        Ok(Self { lats, lons })
    }

    /// Creates a line from a sequence of points.
    pub fn from_points<'a, P>(
        points: impl IntoIterator<Item = &'a P>,
    ) -> Result<Self, GeoprepTypesError>
    where
        P: GeoPoint<Num = f64> + 'a,
    {
        let (lats, lons) = points.into_iter().map(|p| (p.lat(), p.lon())).unzip();
        Self::new(lats, lons)
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.lats.len()
    }

    /// Always false for a constructed line, present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.lats.is_empty()
    }

    /// Latitude of the position at `index`.
    pub fn lat(&self, index: usize) -> f64 {
        self.lats[index]
    }

    /// Longitude of the position at `index`.
    pub fn lon(&self, index: usize) -> f64 {
        self.lons[index]
    }

    /// All latitudes.
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// All longitudes.
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// Returns the position at `index`.
    pub fn point(&self, index: usize) -> Point {
        Point::new(self.lats[index], self.lons[index])
    }

    /// Iterates over the positions of the line.
    pub fn iter_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.lats
            .iter()
            .zip(self.lons.iter())
            .map(|(lat, lon)| Point::new(*lat, *lon))
    }

    /// Whether the first and the last positions are the same.
    pub fn is_closed(&self) -> bool {
        !self.is_empty()
            && self.lats[0] == self.lats[self.len() - 1]
            && self.lons[0] == self.lons[self.len() - 1]
    }
}

/// Closed line used as a polygon boundary.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Line", into = "Line")]
pub struct LinearRing {
    line: Line,
}

impl LinearRing {
    /// Creates a new ring.
    ///
    /// The ring must have at least 4 positions and the first position must be repeated at the end.
    pub fn new(lats: Vec<f64>, lons: Vec<f64>) -> Result<Self, GeoprepTypesError> {
        Self::try_from(Line::new(lats, lons)?)
    }

    /// Creates a ring from a sequence of points. The closing point must be included.
    pub fn from_points<'a, P>(
        points: impl IntoIterator<Item = &'a P>,
    ) -> Result<Self, GeoprepTypesError>
    where
        P: GeoPoint<Num = f64> + 'a,
    {
        Self::try_from(Line::from_points(points)?)
    }

    /// The ring as a line.
    pub fn as_line(&self) -> &Line {
        &self.line
    }

    /// Consumes the ring returning it as a line.
    pub fn into_line(self) -> Line {
        self.line
    }

    /// Number of positions including the closing one.
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Always false for a constructed ring.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Latitude of the position at `index`.
    pub fn lat(&self, index: usize) -> f64 {
        self.line.lat(index)
    }

    /// Longitude of the position at `index`.
    pub fn lon(&self, index: usize) -> f64 {
        self.line.lon(index)
    }

    /// All latitudes.
    pub fn lats(&self) -> &[f64] {
        self.line.lats()
    }

    /// All longitudes.
    pub fn lons(&self) -> &[f64] {
        self.line.lons()
    }

    /// Iterates over the positions of the ring including the closing one.
    pub fn iter_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.line.iter_points()
    }

    /// Winding of the ring in the longitude/latitude plane.
    pub fn winding(&self) -> Winding {
        let points: Vec<Point> = self.iter_points().collect();
        Winding::of(&points)
    }

    /// Returns true if the ring has a vertex exactly at the given position.
    pub fn contains_vertex(&self, point: &impl CartesianPoint2d<Num = f64>) -> bool {
        self.iter_points().any(|p| p.equal(point))
    }
}

impl TryFrom<Line> for LinearRing {
    type Error = GeoprepTypesError;

    fn try_from(line: Line) -> Result<Self, Self::Error> {
        if line.len() < 4 {
            return Err(GeoprepTypesError::InvalidGeometry(format!(
                "at least 4 points in the linear ring is required, got {}",
                line.len()
            )));
        }
        if !line.is_closed() {
            return Err(GeoprepTypesError::InvalidGeometry(format!(
                "first and last points of the linear ring must be the same (it must close itself): \
                 lats[0]={} lats[{}]={} lons[0]={} lons[{}]={}",
                line.lat(0),
                line.len() - 1,
                line.lat(line.len() - 1),
                line.lon(0),
                line.len() - 1,
                line.lon(line.len() - 1),
            )));
        }

        Ok(Self { line })
    }
}

#[derive(Deserialize)]
struct RawLine {
    lats: Vec<f64>,
    lons: Vec<f64>,
}

impl TryFrom<RawLine> for Line {
    type Error = GeoprepTypesError;

    fn try_from(raw: RawLine) -> Result<Self, Self::Error> {
        Line::new(raw.lats, raw.lons)
    }
}

impl From<LinearRing> for Line {
    fn from(ring: LinearRing) -> Self {
        ring.line
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::latlon;

    #[test]
    fn line_validation() {
        assert_matches!(
            Line::new(vec![0.0, 1.0], vec![0.0]),
            Err(GeoprepTypesError::InvalidGeometry(_))
        );
        assert_matches!(
            Line::new(vec![0.0], vec![0.0]),
            Err(GeoprepTypesError::InvalidGeometry(_))
        );
        assert!(Line::new(vec![0.0, 1.0], vec![0.0, 1.0]).is_ok());
    }

    #[test]
    fn line_from_points() {
        let line = Line::from_points(&[latlon!(1.0, 2.0), latlon!(3.0, 4.0)]).unwrap();
        assert_eq!(line.lats(), &[1.0, 3.0]);
        assert_eq!(line.lons(), &[2.0, 4.0]);
        assert_eq!(line.point(1), latlon!(3.0, 4.0));
        assert!(!line.is_closed());
    }

    #[test]
    fn ring_must_be_closed() {
        assert_matches!(
            LinearRing::new(vec![0.0, 0.0, 1.0, 1.0], vec![0.0, 1.0, 1.0, 0.0]),
            Err(GeoprepTypesError::InvalidGeometry(_))
        );
        assert_matches!(
            LinearRing::new(vec![0.0, 1.0, 0.0], vec![0.0, 1.0, 0.0]),
            Err(GeoprepTypesError::InvalidGeometry(_))
        );

        let ring = LinearRing::new(vec![0.0, 0.0, 1.0, 0.0], vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(ring.len(), 4);
        assert!(ring.as_line().is_closed());
    }

    #[test]
    fn ring_winding() {
        let ccw = LinearRing::new(vec![0.0, 0.0, 1.0, 0.0], vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(ccw.winding(), Winding::CounterClockwise);

        let cw = LinearRing::new(vec![0.0, 1.0, 0.0, 0.0], vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(cw.winding(), Winding::Clockwise);
    }

    #[test]
    fn ring_deserialization_validates() {
        let json = r#"{"lats":[0.0,0.0,1.0,0.0],"lons":[0.0,1.0,1.0,0.0]}"#;
        let ring: LinearRing = serde_json::from_str(json).unwrap();
        assert!(ring.contains_vertex(&latlon!(1.0, 1.0)));

        let json = r#"{"lats":[0.0,0.0,1.0,1.0],"lons":[0.0,1.0,1.0,0.0]}"#;
        assert!(serde_json::from_str::<LinearRing>(json).is_err());
    }
}
