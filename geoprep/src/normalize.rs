//! Wrapping of coordinates into their canonical ranges.

use geoprep_types::Point;

/// Remainder of `dividend / divisor` in `(-divisor / 2, divisor / 2]`.
fn centered_modulus(dividend: f64, divisor: f64) -> f64 {
    let mut rtn = dividend % divisor;
    if rtn <= 0.0 {
        rtn += divisor;
    }
    if rtn > divisor / 2.0 {
        rtn -= divisor;
    }
    rtn
}

/// Normalizes longitude into `(-180, 180]`.
///
/// ```
/// use geoprep::normalize_lon;
///
/// assert_eq!(normalize_lon(190.0), -170.0);
/// assert_eq!(normalize_lon(-180.0), 180.0);
/// ```
pub fn normalize_lon(lon: f64) -> f64 {
    let lon = if lon > 180.0 || lon <= -180.0 {
        centered_modulus(lon, 360.0)
    } else {
        lon
    };
    lon + 0.0
}

/// Normalizes latitude into `[-90, 90]`, folding values across the poles.
///
/// ```
/// use geoprep::normalize_lat;
///
/// assert_eq!(normalize_lat(100.0), 80.0);
/// assert_eq!(normalize_lat(-95.0), -85.0);
/// ```
pub fn normalize_lat(lat: f64) -> f64 {
    let lat = if !(-90.0..=90.0).contains(&lat) {
        let lat = centered_modulus(lat, 360.0);
        if lat < -90.0 {
            -180.0 - lat
        } else if lat > 90.0 {
            180.0 - lat
        } else {
            lat
        }
    } else {
        lat
    };
    lat + 0.0
}

/// Same as [`normalize_lon`], but `-180` is kept as is.
pub(crate) fn normalize_lon_minus180_inclusive(lon: f64) -> f64 {
    if lon == -180.0 {
        -180.0
    } else {
        normalize_lon(lon)
    }
}

/// Normalizes a position, dropping its altitude.
///
/// A latitude beyond a pole is folded back and the longitude moves to the other side of the globe.
/// When `norm_lon` is false the longitude keeps its number of full turns, so that a line going
/// past 180 stays continuous.
pub(crate) fn normalize_point(point: &Point, norm_lon: bool, norm_lat: bool) -> Point {
    let mut lat = point.lat();
    let mut lon = point.lon();

    let norm_lat = norm_lat && !(-90.0..=90.0).contains(&lat);
    let norm_lon = norm_lon && (!(-180.0..=180.0).contains(&lon) || norm_lat);

    if norm_lat {
        lat = centered_modulus(lat, 360.0);
        let shift = if lat < -90.0 {
            lat = -180.0 - lat;
            true
        } else if lat > 90.0 {
            lat = 180.0 - lat;
            true
        } else {
            false
        };

        if shift {
            if norm_lon {
                lon += 180.0;
            } else {
                lon += normalize_lon(lon + 180.0) - normalize_lon(lon);
            }
        }
    }

    if norm_lon {
        lon = centered_modulus(lon, 360.0);
    }

    Point::new(lat, lon)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use geoprep_types::latlon;

    use super::*;

    #[test]
    fn lon() {
        assert_eq!(normalize_lon(180.0), 180.0);
        assert_eq!(normalize_lon(-180.0), 180.0);
        assert_eq!(normalize_lon(540.0), 180.0);
        assert_eq!(normalize_lon(-190.0), 170.0);
        assert_eq!(normalize_lon(725.0), 5.0);
        assert!(normalize_lon(-0.0).is_sign_positive());
        assert_eq!(normalize_lon_minus180_inclusive(-180.0), -180.0);
        assert_eq!(normalize_lon_minus180_inclusive(-540.0), 180.0);
    }

    #[test]
    fn lat() {
        assert_eq!(normalize_lat(90.0), 90.0);
        assert_eq!(normalize_lat(-90.0), -90.0);
        assert_eq!(normalize_lat(180.0), 0.0);
        assert_eq!(normalize_lat(270.0), -90.0);
        assert_eq!(normalize_lat(-100.0), -80.0);
        assert!(normalize_lat(-0.0).is_sign_positive());
    }

    #[test]
    fn point_in_range_is_unchanged() {
        let point = normalize_point(&Point::with_alt(45.0, -120.0, 15.0), true, true);
        assert_eq!(point, latlon!(45.0, -120.0));
        assert_eq!(point.alt(), None);
    }

    #[test]
    fn point_across_the_pole() {
        let point = normalize_point(&latlon!(100.0, 10.0), true, true);
        assert_abs_diff_eq!(point.lat(), 80.0);
        assert_abs_diff_eq!(point.lon(), -170.0);

        let point = normalize_point(&latlon!(-95.0, -30.0), true, true);
        assert_abs_diff_eq!(point.lat(), -85.0);
        assert_abs_diff_eq!(point.lon(), 150.0);
    }

    #[test]
    fn point_lon_only() {
        let point = normalize_point(&latlon!(10.0, 190.0), true, true);
        assert_eq!(point, latlon!(10.0, -170.0));

        let point = normalize_point(&latlon!(10.0, 190.0), false, true);
        assert_eq!(point, latlon!(10.0, 190.0));
    }

    #[test]
    fn pole_fold_keeps_turns_without_lon_normalization() {
        let point = normalize_point(&latlon!(100.0, 370.0), false, true);
        assert_abs_diff_eq!(point.lat(), 80.0);
        assert_abs_diff_eq!(point.lon(), 190.0);
    }
}
