//! Reassembly of the split edge graph into polygons.

use std::collections::{HashMap, HashSet};

use geoprep_types::{LinearRing, Polygon};

use super::dateline::{intersection_order, intersections};
use super::edge::{Coord, EdgeGraph};
use super::DATELINE;
use crate::error::{GeoprepError, InvalidShapeError};
use crate::normalize::{normalize_lat, normalize_lon, normalize_lon_minus180_inclusive};

/// Rings of one output polygon, in the planar frame of the edge graph.
#[derive(Debug)]
struct Component {
    shell: Vec<Coord>,
    holes: Vec<Vec<Coord>>,
}

#[derive(Debug)]
struct Walk {
    /// Number of edges in the walked ring.
    length: usize,
    /// Vertex where the ring was found to touch itself.
    partition: Option<Coord>,
}

/// Turns the edge cycles into polygons.
///
/// `edges` are the edges of the original rings, `holes` are the first edges of the holes that were
/// not merged into a shell.
pub(crate) fn compose(
    graph: &mut EdgeGraph,
    edges: &[usize],
    holes: &[usize],
) -> Result<Vec<Polygon>, GeoprepError> {
    let num_holes = holes.len();

    let mut hole_rings = Vec::with_capacity(num_holes);
    for (i, &hole) in holes.iter().enumerate() {
        let walk = walk_component(graph, hole, -(i as i32 + 1), None);
        hole_rings.push(coordinates(graph, hole, &walk)?);
    }

    // Rings are started from their first original edge, so that a shape that does not need any
    // splitting keeps its vertex order.
    let mut starts = edges.to_vec();
    starts.sort_unstable();

    let mut components = vec![];
    let mut main_edges = vec![];
    for id in starts {
        if graph[id].component >= 0 {
            let component_id = -((components.len() + num_holes + 1) as i32);
            let walk = walk_component(graph, id, component_id, Some(&mut main_edges));
            log::trace!(
                "Walked component {component_id} of {} edges starting at ({}, {})",
                walk.length,
                graph[id].coordinate.x,
                graph[id].coordinate.y
            );
            components.push(Component {
                shell: coordinates(graph, id, &walk)?,
                holes: vec![],
            });
        }
    }

    let mut seen = HashSet::new();
    main_edges.retain(|id| seen.insert(*id));

    assign(graph, holes, hole_rings, &mut main_edges, &mut components)?;

    components.into_iter().map(build_polygon).collect()
}

/// Walks the ring starting at `start`, marking its edges with `id` and moving its longitudes out of
/// the frame beyond the dateline.
///
/// When `collected` is given, the walked edges are added to it and the ring is checked for
/// touching itself. At the first repeated vertex the ring is cut in two: the loop since the first
/// appearance of the vertex is relinked into a separate cycle and left unvisited.
fn walk_component(
    graph: &mut EdgeGraph,
    start: usize,
    id: i32,
    mut collected: Option<&mut Vec<usize>>,
) -> Walk {
    let mut any = start;
    while graph[any].coordinate.x.abs() == DATELINE {
        any = graph[any].next;
        if any == start {
            break;
        }
    }

    let x = graph[any].coordinate.x;
    let shift = if x > DATELINE {
        DATELINE
    } else if x < -DATELINE {
        -DATELINE
    } else {
        0.0
    };

    let mut length = 0;
    // The vertex of the cut is shared by both rings.
    let mut split_index = 1;
    let mut partition = None;
    let mut current = start;
    let mut prev = start;
    let mut visited: HashMap<(u64, u64), (usize, usize)> = HashMap::new();

    loop {
        if shift != 0.0 {
            graph[current].coordinate.x -= 2.0 * shift;
        }
        graph[current].component = id;

        if let Some(collected) = collected.as_deref_mut() {
            let coordinate = graph[current].coordinate;
            let seen = visited.get(&coordinate.key()).copied();
            match seen {
                Some((_, first)) => {
                    partition = Some(coordinate);
                    let unvisited = -id;

                    let first_next = graph[first].next;
                    graph[first].next = graph[current].next;
                    graph[current].next = first_next;
                    graph[current].component = unvisited;

                    loop {
                        graph[prev].component = unvisited;
                        let Some(&(before, _)) = visited.get(&graph[prev].coordinate.key()) else {
                            break;
                        };
                        prev = before;
                        split_index += 1;
                        if graph[prev].coordinate == coordinate {
                            break;
                        }
                    }
                }
                None => {
                    visited.insert(coordinate.key(), (prev, current));
                }
            }

            collected.push(current);
            prev = current;
        }

        length += 1;
        if partition.is_some() {
            break;
        }

        current = graph[current].next;
        if current == start {
            break;
        }
    }

    Walk {
        length: if split_index != 1 {
            length - split_index
        } else {
            length
        },
        partition,
    }
}

/// Closed coordinate sequence of the ring walked from `start`.
fn coordinates(
    graph: &EdgeGraph,
    start: usize,
    walk: &Walk,
) -> Result<Vec<Coord>, InvalidShapeError> {
    let mut coords = Vec::with_capacity(walk.length + 1);
    let mut edge = start;
    for _ in 0..=walk.length {
        coords.push(graph[edge].coordinate);
        edge = graph[edge].next;
    }

    if coords.first() != coords.last() {
        let at = walk.partition.unwrap_or(graph[start].coordinate);
        return Err(InvalidShapeError::SelfIntersection {
            lat: at.y,
            lon: at.x,
        });
    }

    Ok(coords)
}

/// Attaches every hole to the component that contains it.
///
/// The component is found by crossing the shells with the meridian of the first hole vertex: the
/// closest crossing to the south of the vertex belongs to the enclosing shell.
fn assign(
    graph: &mut EdgeGraph,
    holes: &[usize],
    hole_rings: Vec<Vec<Coord>>,
    main_edges: &mut [usize],
    components: &mut [Component],
) -> Result<(), InvalidShapeError> {
    let num_holes = holes.len() as i32;

    for (&hole, ring) in holes.iter().zip(hole_rings) {
        let vertex = graph[hole].coordinate;
        let count = intersections(vertex.x, graph, main_edges);
        if count == 0 {
            return Err(InvalidShapeError::HoleNotWithinPolygon);
        }

        let index = match main_edges[..count]
            .binary_search_by(|&id| intersection_order(graph[id].intersect, Some(vertex)))
        {
            Ok(pos) => pos,
            // No shell crosses the meridian south of the hole.
            Err(0) => return Err(InvalidShapeError::HoleNotWithinPolygon),
            Err(pos) => pos - 1,
        };

        let component = -graph[main_edges[index]].component - num_holes - 1;
        let target = usize::try_from(component)
            .ok()
            .and_then(|c| components.get_mut(c))
            .ok_or(InvalidShapeError::HoleNotWithinPolygon)?;

        log::debug!(
            "Hole starting at ({}, {}) is assigned to polygon {component}",
            vertex.x,
            vertex.y
        );
        target.holes.push(ring);
    }

    Ok(())
}

fn build_polygon(component: Component) -> Result<Polygon, GeoprepError> {
    // -180 is kept on shells, so that the sides of a split polygon stay apart.
    let shell = build_ring(&component.shell, normalize_lon_minus180_inclusive)?;
    let holes = component
        .holes
        .iter()
        .map(|ring| build_ring(ring, normalize_lon))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Polygon::new(shell, holes))
}

fn build_ring(coords: &[Coord], normalize: fn(f64) -> f64) -> Result<LinearRing, GeoprepError> {
    let (lats, lons) = coords
        .iter()
        .map(|c| (normalize_lat(c.y), normalize(c.x)))
        .unzip();
    Ok(LinearRing::new(lats, lons)?)
}
