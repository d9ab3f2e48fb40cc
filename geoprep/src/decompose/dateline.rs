//! Splitting of the edge graph at the dateline.

use std::cmp::Ordering;

use super::edge::{Coord, EdgeGraph};
use super::intersect::{intersection, position};
use super::DATELINE;
use crate::error::InvalidShapeError;

/// South to north order of meridian crossings. Edges without a crossing go last.
pub(crate) fn intersection_order(a: Option<Coord>, b: Option<Coord>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.y.total_cmp(&b.y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Computes the crossings of `edges` with the meridian `dateline` and sorts `edges` by them.
///
/// Returns the number of crossings, which are the leading entries of `edges` after the call.
pub(crate) fn intersections(dateline: f64, graph: &mut EdgeGraph, edges: &mut [usize]) -> usize {
    let mut count = 0;
    let mut max_component = 0;

    for &id in edges.iter() {
        let p1 = graph[id].coordinate;
        let p2 = graph.next_coordinate(id);
        let intersect = intersection(p1.x, p2.x, dateline).map(|t| position(p1, p2, t, dateline));
        if intersect.is_some() {
            count += 1;
            max_component = max_component.max(graph[id].component);
        }
        graph[id].intersect = intersect;
    }

    // A hole touching the meridian in a single vertex does not cross it.
    for component in 1..=max_component {
        if clear_touching(graph, edges, component) {
            count -= 1;
        }
    }

    edges.sort_by(|a, b| intersection_order(graph[*a].intersect, graph[*b].intersect));
    count
}

fn clear_touching(graph: &mut EdgeGraph, edges: &[usize], component: i32) -> bool {
    let mut touching = None;
    for &id in edges {
        if graph[id].intersect.is_some() && graph[id].component == component {
            if touching.is_some() {
                return false;
            }
            touching = Some(id);
        }
    }

    match touching {
        Some(id) => {
            graph[id].intersect = None;
            true
        }
        None => false,
    }
}

/// Connects crossings pairwise, splitting rings at the meridian.
///
/// Crossings are sorted south to north, so on the first edge of every pair the polygon interior is
/// entered and on the second one it is left. A hole crossed by the meridian becomes a part of the
/// shell ring it is connected to and is removed from `holes`.
pub(crate) fn merge(
    graph: &mut EdgeGraph,
    edges: &[usize],
    count: usize,
    holes: &mut Vec<usize>,
) -> Result<(), InvalidShapeError> {
    for i in (0..count).step_by(2) {
        let (Some(&e1), Some(&e2)) = (edges.get(i), edges.get(i + 1)) else {
            break;
        };

        let component = graph[e2].component;
        if component > 0 && graph[e2].intersect.is_some() {
            if let Some(pos) = holes
                .iter()
                .position(|&hole| graph[hole].component == component)
            {
                log::debug!("Hole {component} crosses the dateline and is merged into its shell");
                holes.swap_remove(pos);
            }
        }

        if graph[e1].intersect.is_none() || graph[e2].intersect.is_none() {
            continue;
        }

        // The two edges may already be joined by an edge running along the dateline.
        let e1_next = graph[e1].next;
        let joined_along_dateline = graph.next_coordinate(e1_next) == graph[e2].coordinate
            && graph[e1_next].coordinate.x.abs() == DATELINE
            && graph[e2].coordinate.x.abs() == DATELINE;

        if !joined_along_dateline {
            connect(graph, e1, e2)?;
        }
    }

    Ok(())
}

/// Inserts edges at the crossings of `input` and `output` so that the ring they are part of is
/// cut in two along the meridian.
fn connect(graph: &mut EdgeGraph, input: usize, output: usize) -> Result<(), InvalidShapeError> {
    let (Some(in_x), Some(out_x)) = (graph[input].intersect, graph[output].intersect) else {
        return Ok(());
    };

    let in_next = graph[input].next;
    let out_next = graph[output].next;

    if in_x != graph[in_next].coordinate {
        // The input edge crosses the meridian between its vertices.
        let e0 = graph.push_linked(in_x, in_next)?;
        graph[input].next = link_output(graph, in_x, out_x, out_next)?;
        graph[output].next = graph.push_on_dateline(out_x, e0)?;
    } else if in_next != output && graph[input].coordinate != out_x {
        // The input edge ends on the meridian.
        let e2 = graph.push_on_dateline(out_x, in_next)?;
        graph[input].next = link_output(graph, in_x, out_x, out_next)?;
        graph[output].next = e2;
    }

    Ok(())
}

/// Edge that leads from the input crossing to the part of the ring after the output crossing.
fn link_output(
    graph: &mut EdgeGraph,
    in_x: Coord,
    out_x: Coord,
    out_next: usize,
) -> Result<usize, InvalidShapeError> {
    if out_x != graph[out_next].coordinate {
        let e1 = graph.push_linked(out_x, out_next)?;
        graph.push_on_dateline(in_x, e1)
    } else {
        graph.push_on_dateline(in_x, out_next)
    }
}
