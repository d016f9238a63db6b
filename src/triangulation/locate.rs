//! Bucket grid for point location.

use super::simplex::Triangle;
use crate::primitives::Point2;
use num_traits::Float;

/// A uniform grid over the bounding box of a mesh.
///
/// Every cell lists, in ascending order, the simplices whose bounding box
/// overlaps it. A simplex containing a point always overlaps the point's cell,
/// so scanning that one cell finds the same first simplex as scanning them
/// all. Simplices with a non-finite vertex are not registered.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SimplexGrid<F> {
    min: Point2<F>,
    max: Point2<F>,
    res: usize,
    /// Start index into `simplex_ids` for each cell, plus final length.
    cell_offsets: Vec<usize>,
    /// Simplex ids grouped by cell.
    simplex_ids: Vec<usize>,
}

impl<F: Float> SimplexGrid<F> {
    /// Builds a grid of about one cell per registered simplex.
    ///
    /// Vertex indices must already be validated.
    pub(crate) fn new(points: &[Point2<F>], simplices: &[Triangle]) -> Self {
        let boxes: Vec<Option<(Point2<F>, Point2<F>)>> = simplices
            .iter()
            .map(|tri| bounding_box(points, tri))
            .collect();

        let registered = boxes.iter().flatten().count();
        let (min, max) = boxes
            .iter()
            .flatten()
            .copied()
            .reduce(|(lo, hi), (b_lo, b_hi)| {
                (
                    Point2::new(lo.x.min(b_lo.x), lo.y.min(b_lo.y)),
                    Point2::new(hi.x.max(b_hi.x), hi.y.max(b_hi.y)),
                )
            })
            .unwrap_or_default();

        let res = ((registered as f64).sqrt().ceil() as usize).max(1);
        let num_cells = res * res;
        let mut grid = SimplexGrid {
            min,
            max,
            res,
            cell_offsets: Vec::with_capacity(num_cells + 1),
            simplex_ids: Vec::new(),
        };

        // Step 1: Count simplices per cell
        let mut cell_counts = vec![0usize; num_cells];
        for &bounds in boxes.iter().flatten() {
            for cell in grid.cells_overlapping(bounds) {
                cell_counts[cell] += 1;
            }
        }

        // Step 2: Prefix sum to get offsets
        grid.cell_offsets.push(0);
        let mut sum = 0;
        for &count in &cell_counts {
            sum += count;
            grid.cell_offsets.push(sum);
        }

        // Step 3: Scatter simplices into cells, in simplex order
        let mut simplex_ids = vec![0usize; sum];
        let mut cell_cursors = grid.cell_offsets[..num_cells].to_vec();
        for (simplex, bounds) in boxes.iter().enumerate() {
            let Some(bounds) = *bounds else {
                continue;
            };
            for cell in grid.cells_overlapping(bounds) {
                simplex_ids[cell_cursors[cell]] = simplex;
                cell_cursors[cell] += 1;
            }
        }
        grid.simplex_ids = simplex_ids;

        grid
    }

    /// The simplices that may contain `point`, in ascending order.
    ///
    /// Empty for non-finite points and points outside the grid.
    pub(crate) fn candidates(&self, point: Point2<F>) -> &[usize] {
        let inside = point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y;
        if !inside || self.simplex_ids.is_empty() {
            return &[];
        }

        let cell = self.row(point.y) * self.res + self.column(point.x);
        &self.simplex_ids[self.cell_offsets[cell]..self.cell_offsets[cell + 1]]
    }

    fn cells_overlapping(&self, (lo, hi): (Point2<F>, Point2<F>)) -> impl Iterator<Item = usize> {
        let res = self.res;
        let (c0, c1) = (self.column(lo.x), self.column(hi.x));
        let (r0, r1) = (self.row(lo.y), self.row(hi.y));
        (r0..=r1).flat_map(move |r| (c0..=c1).map(move |c| r * res + c))
    }

    #[inline]
    fn column(&self, x: F) -> usize {
        axis_cell(x, self.min.x, self.max.x, self.res)
    }

    #[inline]
    fn row(&self, y: F) -> usize {
        axis_cell(y, self.min.y, self.max.y, self.res)
    }
}

/// Maps `v` in `[lo, hi]` to a cell in `0..res`. Monotone in `v`.
#[inline]
fn axis_cell<F: Float>(v: F, lo: F, hi: F, res: usize) -> usize {
    if hi <= lo {
        return 0;
    }
    let scale = F::from(res).unwrap_or_else(F::one);
    let t = (v - lo) / (hi - lo) * scale;
    let cell = match t.to_usize() {
        Some(cell) => cell,
        None if t > F::zero() => res - 1,
        None => 0,
    };
    cell.min(res - 1)
}

fn bounding_box<F: Float>(points: &[Point2<F>], tri: &Triangle) -> Option<(Point2<F>, Point2<F>)> {
    let [a, b, c] = [points[tri.a], points[tri.b], points[tri.c]];
    let finite = [a, b, c].iter().all(|p| p.x.is_finite() && p.y.is_finite());
    finite.then(|| {
        (
            Point2::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            Point2::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        )
    })
}
