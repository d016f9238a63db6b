//! Simplices and edge keys.

/// A triangle represented by indices into a point array.
///
/// Vertex order is whatever the triangulation produced; it is expected to be
/// consistent across simplices but not necessarily counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the vertex indices in order.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three directed edges `(a, b)`, `(b, c)`, `(c, a)`.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Returns the edge opposite vertex `k` (0, 1 or 2).
    #[inline]
    pub fn opposite_edge(&self, k: usize) -> (usize, usize) {
        let v = self.vertices();
        (v[(k + 1) % 3], v[(k + 2) % 3])
    }
}

/// An undirected edge, normalized so the smaller index comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EdgeKey(usize, usize);

impl EdgeKey {
    pub(crate) fn new(a: usize, b: usize) -> Self {
        if a < b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }
}
