//! Cyclic edge graph the polygon decomposition works on.
//!
//! Edges are stored in an arena and refer to each other by index. Every edge points to the next
//! edge of its ring, so following `next` from any edge eventually returns to it.

use std::ops::{Index, IndexMut};

use geoprep_types::cartesian::CartesianPoint2d;

use crate::error::InvalidShapeError;

/// Planar position, `x` is longitude and `y` is latitude.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Hashable identity of the position. `0.0` and `-0.0` give the same key.
    pub fn key(&self) -> (u64, u64) {
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

impl CartesianPoint2d for Coord {
    type Num = f64;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Edge {
    /// Start of the edge.
    pub coordinate: Coord,
    /// Index of the edge starting where this one ends.
    pub next: usize,
    /// Crossing with the meridian of the current pass, if any.
    pub intersect: Option<Coord>,
    /// Ring or component the edge belongs to. Negative values mark visited edges.
    pub component: i32,
}

#[derive(Debug, Default)]
pub(crate) struct EdgeGraph {
    edges: Vec<Edge>,
}

impl EdgeGraph {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Adds an edge. Until linked, the new edge points to itself.
    pub fn push(&mut self, coordinate: Coord, component: i32) -> usize {
        let id = self.edges.len();
        self.edges.push(Edge {
            coordinate,
            next: id,
            intersect: None,
            component,
        });
        id
    }

    /// Adds an edge that starts at `coordinate` and continues with `next`.
    pub fn push_linked(&mut self, coordinate: Coord, next: usize) -> Result<usize, InvalidShapeError> {
        let id = self.push(coordinate, 0);
        self.set_next(id, next)?;
        Ok(id)
    }

    /// Same as [`EdgeGraph::push_linked`], with the intersection set to the edge start.
    pub fn push_on_dateline(
        &mut self,
        coordinate: Coord,
        next: usize,
    ) -> Result<usize, InvalidShapeError> {
        let id = self.push_linked(coordinate, next)?;
        self.edges[id].intersect = Some(coordinate);
        Ok(id)
    }

    /// Links `id` to `next`, taking over the component of `next`.
    ///
    /// Fails if both edges start at the same position, since the edge between them would be
    /// degenerate.
    pub fn set_next(&mut self, id: usize, next: usize) -> Result<(), InvalidShapeError> {
        let coordinate = self.edges[id].coordinate;
        let target = &self.edges[next];
        if coordinate == target.coordinate {
            return Err(InvalidShapeError::DuplicateConsecutiveCoordinates {
                lat: coordinate.y,
                lon: coordinate.x,
            });
        }

        let component = target.component;
        let edge = &mut self.edges[id];
        edge.next = next;
        edge.component = component;
        Ok(())
    }

    /// Start of the edge following `id`.
    pub fn next_coordinate(&self, id: usize) -> Coord {
        self.edges[self.edges[id].next].coordinate
    }
}

impl Index<usize> for EdgeGraph {
    type Output = Edge;

    fn index(&self, index: usize) -> &Self::Output {
        &self.edges[index]
    }
}

impl IndexMut<usize> for EdgeGraph {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.edges[index]
    }
}
