//! Conversion of polygon rings into the edge graph.

use std::collections::HashSet;

use geoprep_types::cartesian::Orientation;
use geoprep_types::{LinearRing, Polygon};

use super::edge::{Coord, EdgeGraph};
use super::DATELINE;
use crate::error::InvalidShapeError;

/// Edge graph of a polygon before any splitting.
#[derive(Debug)]
pub(crate) struct PolygonEdges {
    pub graph: EdgeGraph,
    /// First edge of every hole, in the order of the holes in the polygon.
    pub holes: Vec<usize>,
    /// Whether the shell was moved to the `[0, 360)` longitude frame.
    pub translated: bool,
}

/// Builds the edge graph of the polygon.
///
/// The shell gets component `0` and hole `i` gets component `i + 1`. Rings are linked so that the
/// shell follows the requested handedness and holes go the opposite way.
pub(crate) fn build_edges(
    polygon: &Polygon,
    right_handed: bool,
) -> Result<PolygonEdges, InvalidShapeError> {
    for hole in polygon.holes() {
        validate_hole(polygon.shell(), hole)?;
    }

    let num_edges = polygon.iter_rings().map(|ring| ring.len() - 1).sum();
    let mut graph = EdgeGraph::with_capacity(num_edges);
    let mut holes = Vec::with_capacity(polygon.num_holes());
    let mut translated = false;

    for (component, ring) in polygon.iter_rings().enumerate() {
        let first = graph.len();
        let mut points = ring_coords(ring);
        add_ring(
            &mut graph,
            component as i32,
            right_handed,
            &mut points,
            &mut translated,
        )?;

        if component > 0 {
            holes.push(first);
        }
    }

    Ok(PolygonEdges {
        graph,
        holes,
        translated,
    })
}

fn ring_coords(ring: &LinearRing) -> Vec<Coord> {
    ring.iter_points()
        .map(|p| Coord::new(p.lon(), p.lat()))
        .collect()
}

/// A hole may touch the shell, but in a single point at most.
fn validate_hole(shell: &LinearRing, hole: &LinearRing) -> Result<(), InvalidShapeError> {
    let exterior: HashSet<_> = ring_coords(shell).iter().map(Coord::key).collect();
    let shared: HashSet<_> = ring_coords(hole)
        .iter()
        .map(Coord::key)
        .filter(|key| exterior.contains(key))
        .collect();

    if shared.len() >= 2 {
        return Err(InvalidShapeError::HoleSharesTooManyPointsWithShell);
    }

    Ok(())
}

fn add_ring(
    graph: &mut EdgeGraph,
    component: i32,
    right_handed: bool,
    points: &mut [Coord],
    translated: &mut bool,
) -> Result<(), InvalidShapeError> {
    // Holes go against the shell.
    let direction = (component == 0) ^ right_handed;
    let left_handed = !right_handed;
    let length = points.len() - 1;

    let mut clockwise = is_clockwise(&points[..length])?;

    let (min_x, max_x) = points[..length]
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
            (min.min(p.x), max.max(p.x))
        });
    let span = max_x - min_x;

    // A shell with the wrong winding that spans more than a hemisphere is taken to be going around
    // the dateline. Spanning the whole globe is ambiguous, so it is left as is.
    let incorrect_orientation = component == 0 && left_handed != clockwise;
    if (incorrect_orientation && span > DATELINE && span != 2.0 * DATELINE)
        || (*translated && component != 0)
    {
        translate(points);
        if component == 0 {
            log::debug!("Shell spanning {span} degrees of longitude is moved across the dateline");
            *translated = true;
        }

        if component == 0 || left_handed == clockwise {
            clockwise = !clockwise;
        }
    }

    concat(graph, component, direction ^ clockwise, &points[..length])
}

fn translate(points: &mut [Coord]) {
    for p in points {
        if p.x < 0.0 {
            p.x += 2.0 * DATELINE;
        }
    }
}

/// Adds the ring as a cycle of edges, following the points backwards if `reversed` is set.
fn concat(
    graph: &mut EdgeGraph,
    component: i32,
    reversed: bool,
    points: &[Coord],
) -> Result<(), InvalidShapeError> {
    let first = graph.len();
    for p in points {
        graph.push(*p, component);
    }
    let last = graph.len() - 1;

    if reversed {
        for id in first + 1..=last {
            graph.set_next(id, id - 1)?;
        }
        graph.set_next(first, last)
    } else {
        for id in first..last {
            graph.set_next(id, id + 1)?;
        }
        graph.set_next(last, first)
    }
}

/// Winding of a ring given without its closing point, decided by the turn at the southernmost
/// (then westernmost) vertex.
pub(crate) fn is_clockwise(points: &[Coord]) -> Result<bool, InvalidShapeError> {
    let length = points.len();
    let mut top = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let current = &points[top];
        if p.y < current.y || (p.y == current.y && p.x < current.x) {
            top = i;
        }
    }

    let prev = (top + length - 1) % length;
    let next = (top + 1) % length;

    match Orientation::triplet(&points[prev], &points[top], &points[next]) {
        Orientation::Clockwise => Ok(true),
        Orientation::Counterclockwise => Ok(false),
        Orientation::Collinear => Err(InvalidShapeError::UndecidableOrientation {
            lat: points[top].y,
            lon: points[top].x,
        }),
    }
}
