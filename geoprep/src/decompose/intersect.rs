use super::edge::Coord;

/// Parametric position where the segment from `p1x` to `p2x` reaches the meridian `dateline`.
///
/// Returns `None` if the segment does not reach it. A segment starting on the meridian is not a
/// crossing (`t == 0` is excluded), a segment ending on it is (`t == 1`). A segment lying on the
/// meridian reports its end.
pub(crate) fn intersection(p1x: f64, p2x: f64, dateline: f64) -> Option<f64> {
    if p1x == p2x {
        return (p1x == dateline).then_some(1.0);
    }

    let t = (dateline - p1x) / (p2x - p1x);
    if t > 1.0 || t <= 0.0 {
        None
    } else {
        Some(t)
    }
}

/// Point at the parametric position `t` of the segment `p1 -> p2`, placed exactly on the meridian
/// `dateline`.
pub(crate) fn position(p1: Coord, p2: Coord, t: f64, dateline: f64) -> Coord {
    if t == 1.0 {
        p2
    } else {
        Coord::new(dateline, p1.y + t * (p2.y - p1.y))
    }
}
