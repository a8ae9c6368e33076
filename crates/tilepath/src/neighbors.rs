use tilepath_core::Point;

use crate::traits::{GridLookup, GridNode};

/// Offsets probed around a node, in enumeration order.
///
/// The order decides which of several equally cheap nodes a search discovers
/// first, so it is part of the observable behavior.
pub const NEIGHBOR_OFFSETS: [Point; 8] = [
    Point::new(1, 1),
    Point::new(1, 0),
    Point::new(1, -1),
    Point::new(0, -1),
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
];

/// Reusable neighbor enumeration buffer.
///
/// Queries the grid at each of the [`NEIGHBOR_OFFSETS`] around a node and
/// keeps the nodes that exist, in offset order.
#[derive(Debug)]
pub struct Neighbors<N> {
    buf: Vec<N>,
}

impl<N> Default for Neighbors<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Neighbors<N> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(NEIGHBOR_OFFSETS.len()),
        }
    }
}

impl<N: GridNode> Neighbors<N> {
    /// Return the traversable neighbors of `node`. Offsets the grid reports
    /// as absent are skipped.
    pub fn of<G>(&mut self, grid: &G, node: N) -> &[N]
    where
        G: GridLookup<Node = N> + ?Sized,
    {
        self.buf.clear();
        let p = node.pos();
        for d in NEIGHBOR_OFFSETS {
            // Offsets past the edge of the coordinate space have no cell.
            let (Some(x), Some(y)) = (p.x.checked_add(d.x), p.y.checked_add(d.y)) else {
                continue;
            };
            let Some(n) = grid.try_get_node(x, y) else {
                continue;
            };
            // Wrapping grids can map two offsets onto the same node.
            if !self.buf.contains(&n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

/// Traversable neighbors of `node`, in [`NEIGHBOR_OFFSETS`] order.
pub fn neighbors<G>(grid: &G, node: G::Node) -> Vec<G::Node>
where
    G: GridLookup + ?Sized,
{
    Neighbors::new().of(grid, node).to_vec()
}
