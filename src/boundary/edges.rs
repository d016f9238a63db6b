//! Edges and edge cancellation.

use super::order::{order_edges, OrderedBoundary};
use crate::error::GeometryError;
use crate::triangulation::{EdgeKey, Triangulation};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// A directed edge between two vertex indices.
///
/// Equality is directed: `(a, b) != (b, a)`. Use
/// [`same_segment`](Edge::same_segment) for the direction-agnostic comparison
/// that governs cancellation in an [`EdgeSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Vertex the edge leaves from.
    pub start: usize,
    /// Vertex the edge arrives at.
    pub end: usize,
}

impl Edge {
    /// Creates a directed edge.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the same edge traversed the other way.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns true if both edges join the same two vertices, in either direction.
    #[inline]
    pub fn same_segment(self, other: Self) -> bool {
        self.key() == other.key()
    }

    #[inline]
    pub(crate) fn key(self) -> EdgeKey {
        EdgeKey::new(self.start, self.end)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

/// An edge collection in which a repeated segment cancels the live copy.
///
/// Inserting an edge whose segment is already present (in either direction)
/// removes the present edge instead of adding a second one. After inserting
/// the edges of a set of triangles, exactly the edges that belong to one
/// triangle of the set survive. A segment inserted an odd number of times
/// survives once, at the position of its last insertion.
///
/// Iteration yields surviving edges in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    slots: Vec<Option<Edge>>,
    live: HashMap<EdgeKey, usize>,
}

impl EdgeSet {
    /// Creates an empty edge set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `edge`, or cancels it against a live copy of the same segment.
    ///
    /// Returns `true` if the edge was appended, `false` if it cancelled.
    pub fn insert(&mut self, edge: Edge) -> bool {
        match self.live.entry(edge.key()) {
            Entry::Occupied(entry) => {
                let slot = entry.remove();
                self.slots[slot] = None;
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(self.slots.len());
                self.slots.push(Some(edge));
                true
            }
        }
    }

    /// Returns true if the segment of `edge` is live, in either direction.
    pub fn contains(&self, edge: Edge) -> bool {
        self.live.contains_key(&edge.key())
    }

    /// Returns the number of surviving edges.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns true if no edges survive.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Iterates over surviving edges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Collects the surviving edges in insertion order.
    pub fn to_vec(&self) -> Vec<Edge> {
        self.iter().collect()
    }

    /// Chains the surviving edges into a traversal. See [`order_edges`].
    pub fn ordered(&self) -> OrderedBoundary {
        order_edges(&self.to_vec())
    }
}

impl PartialEq for EdgeSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for EdgeSet {}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut set = EdgeSet::new();
        for edge in iter {
            set.insert(edge);
        }
        set
    }
}

/// Finds the outer edges of the union of the given simplices.
///
/// Each simplex contributes its directed edges `(v0, v1)`, `(v1, v2)`,
/// `(v2, v0)`; edges shared by two simplices of the set cancel. For a set of
/// consistently oriented triangles the survivors are the boundary of their
/// union, still oriented like the triangles.
///
/// # Errors
///
/// Returns [`GeometryError::SimplexOutOfRange`] if a simplex id is not part of
/// the triangulation.
pub fn assemble_boundary_edges<T: Triangulation>(
    triangles: &[usize],
    tri: &T,
) -> Result<EdgeSet, GeometryError> {
    let simplices = tri.simplices();
    let mut edges = EdgeSet::new();

    for &index in triangles {
        let simplex = simplices.get(index).ok_or(GeometryError::SimplexOutOfRange {
            index,
            len: simplices.len(),
        })?;

        for edge in simplex.edges() {
            edges.insert(edge.into());
        }
    }

    Ok(edges)
}
