//! Chaining boundary edges into a traversal.

use super::edges::Edge;
use crate::error::GeometryError;
use crate::primitives::Point2;
use std::collections::{HashMap, VecDeque};

/// A chain of edges where each edge starts at the previous edge's end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedBoundary {
    edges: Vec<Edge>,
}

impl OrderedBoundary {
    /// The chained edges in traversal order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of edges in the chain.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the chain has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns true if the last edge ends where the first edge starts.
    ///
    /// An empty chain is not closed.
    pub fn is_closed(&self) -> bool {
        match (self.edges.first(), self.edges.last()) {
            (Some(first), Some(last)) => last.end == first.start,
            _ => false,
        }
    }

    /// The vertex ring of the chain: the start vertex of every edge.
    pub fn vertices(&self) -> Vec<usize> {
        self.edges.iter().map(|e| e.start).collect()
    }

    /// Looks up the coordinates of [`vertices`](Self::vertices) in `points`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::VertexOutOfRange`] if a vertex has no point.
    pub fn to_polygon<F: Copy>(&self, points: &[Point2<F>]) -> Result<Vec<Point2<F>>, GeometryError> {
        self.edges
            .iter()
            .map(|e| {
                points
                    .get(e.start)
                    .copied()
                    .ok_or(GeometryError::VertexOutOfRange {
                        index: e.start,
                        len: points.len(),
                    })
            })
            .collect()
    }
}

/// Orders an unordered set of edges into a head-to-tail traversal.
///
/// Starts from the first edge and repeatedly appends the first remaining edge
/// (in input order) whose start vertex is the current end vertex. Stops when
/// no edge matches or every edge has been used.
///
/// Closure is not verified. A disconnected input yields only the chain
/// reachable from the first edge, and at a branching vertex the earliest
/// remaining candidate wins, so the result depends on input order. An empty
/// input gives an empty boundary.
pub fn order_edges(edges: &[Edge]) -> OrderedBoundary {
    let Some((&first, rest)) = edges.split_first() else {
        return OrderedBoundary::default();
    };

    let mut by_start: HashMap<usize, VecDeque<Edge>> = HashMap::new();
    for &edge in rest {
        by_start.entry(edge.start).or_default().push_back(edge);
    }

    let mut ordered = Vec::with_capacity(edges.len());
    ordered.push(first);
    let mut current = first;

    while let Some(next) = by_start.get_mut(&current.end).and_then(VecDeque::pop_front) {
        ordered.push(next);
        current = next;
    }

    OrderedBoundary { edges: ordered }
}
