use geoprep_types::Line;

use super::edge::Coord;
use super::intersect::{intersection, position};
use super::DATELINE;
use crate::error::GeoprepError;
use crate::normalize::{normalize_lat, normalize_lon_minus180_inclusive, normalize_point};

#[derive(Debug)]
struct Part {
    lons: Vec<f64>,
    lats: Vec<f64>,
}

/// Splits the line into parts that do not cross the dateline.
///
/// Every segment is taken the short way around the globe: lines from `170` to `190` and from `170`
/// to `-170` both cross the dateline.
pub(crate) fn decompose_line(line: &Line) -> Result<Vec<Line>, GeoprepError> {
    let (mut lons, lats): (Vec<f64>, Vec<f64>) = line
        .iter_points()
        .map(|p| {
            let p = normalize_point(&p, false, true);
            (p.lon(), p.lat())
        })
        .unzip();
    unwrap_longitudes(&mut lons);

    let mut parts = vec![];
    for part in split(DATELINE, lons, lats) {
        parts.extend(split(-DATELINE, part.lons, part.lats));
    }

    if parts.len() > 1 {
        log::debug!(
            "Line of {} points is split into {} parts at the dateline",
            line.len(),
            parts.len()
        );
    }

    parts
        .into_iter()
        .map(|part| {
            let lats = part.lats.into_iter().map(normalize_lat).collect();
            let lons = part
                .lons
                .into_iter()
                .map(normalize_lon_minus180_inclusive)
                .collect();
            Ok(Line::new(lats, lons)?)
        })
        .collect()
}

/// Moves every longitude by whole turns so that no segment spans more than half of the globe.
fn unwrap_longitudes(lons: &mut [f64]) {
    for i in 1..lons.len() {
        let gap = lons[i] - lons[i - 1];
        if gap.abs() > DATELINE {
            let turns = ((gap.abs() - DATELINE) / (2.0 * DATELINE)).ceil();
            lons[i] -= gap.signum() * turns * 2.0 * DATELINE;
        }
    }
}

/// Shift of the longitude frame a position belongs to.
fn frame_shift(lon: f64) -> f64 {
    if lon > DATELINE {
        DATELINE
    } else if lon < -DATELINE {
        -DATELINE
    } else {
        0.0
    }
}

fn shifted(shift: f64, mut lons: Vec<f64>) -> Vec<f64> {
    if shift != 0.0 {
        for lon in &mut lons {
            *lon -= 2.0 * shift;
        }
    }
    lons
}

/// Cuts the line at every crossing of the meridian `dateline`.
///
/// The crossing point ends one part and starts the next one. Each part is moved back from the
/// frame it was in.
fn split(dateline: f64, mut lons: Vec<f64>, mut lats: Vec<f64>) -> Vec<Part> {
    let mut parts = vec![];
    let mut offset = 0;
    let mut shift = frame_shift(lons[0]);

    for i in 1..lons.len() {
        let Some(t) = intersection(lons[i - 1], lons[i], dateline) else {
            continue;
        };

        if t < 1.0 {
            let crossing = position(
                Coord::new(lons[i - 1], lats[i - 1]),
                Coord::new(lons[i], lats[i]),
                t,
                dateline,
            );

            let mut part_lons = lons[offset..=i].to_vec();
            let mut part_lats = lats[offset..=i].to_vec();
            part_lons[i - offset] = crossing.x;
            part_lats[i - offset] = crossing.y;
            parts.push(Part {
                lons: shifted(shift, part_lons),
                lats: part_lats,
            });

            lons[i - 1] = crossing.x;
            lats[i - 1] = crossing.y;
            offset = i - 1;
            shift = frame_shift(lons[i]);
        } else {
            parts.push(Part {
                lons: shifted(shift, lons[offset..=i].to_vec()),
                lats: lats[offset..=i].to_vec(),
            });
            offset = i;
            // The next part starts on the meridian, so its frame is given by the point after it.
            if let Some(&lon) = lons.get(i + 1) {
                shift = frame_shift(lon);
            }
        }
    }

    if offset == 0 {
        parts.push(Part {
            lons: shifted(shift, lons),
            lats,
        });
    } else if offset < lons.len() - 1 {
        parts.push(Part {
            lons: shifted(shift, lons[offset..].to_vec()),
            lats: lats[offset..].to_vec(),
        });
    }

    parts
}
