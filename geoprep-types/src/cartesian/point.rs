use num_traits::Num;

/// Point in a 2d plane.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: Num + Copy + PartialOrd;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates of the points are equal.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}
