use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;

/// Direction in which the points of a closed contour are listed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    CounterClockwise,
}

/// Signed area of a closed contour (shoelace formula).
///
/// Positive for counterclockwise contours. The closing point may or may not be repeated at the end.
pub fn area_signed<'a, P>(points: impl IntoIterator<Item = &'a P>) -> P::Num
where
    P: CartesianPoint2d + 'a,
{
    let mut iter = points.into_iter();
    let Some(first) = iter.next() else {
        return P::Num::zero();
    };

    let mut prev = first;
    let mut aggr = P::Num::zero();
    for p in iter.chain(std::iter::once(first)) {
        aggr = aggr + prev.x() * p.y() - p.x() * prev.y();
        prev = p;
    }

    aggr / (P::Num::one() + P::Num::one())
}

impl Winding {
    /// Winding of a closed contour by the sign of its area. Degenerate contours are reported as
    /// clockwise.
    pub fn of<'a, P>(points: impl IntoIterator<Item = &'a P>) -> Self
    where
        P: CartesianPoint2d + 'a,
    {
        if area_signed(points) <= P::Num::zero() {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}
