use std::fmt::Debug;
use std::hash::Hash;

use tilepath_core::Point;

/// Cost unit shared by terrain costs, heuristic estimates and accumulated
/// path costs.
pub type Cost = i32;

/// Handle to a node owned by a [`GridLookup`].
///
/// Equality is node identity: two handles are equal only if they refer to
/// the same node. Handles are cheap to copy and are used as keys for the
/// per-search scratch state.
pub trait GridNode: Copy + Eq + Hash + Debug {
    /// Grid coordinates of the node.
    fn pos(&self) -> Point;
}

/// Coordinates can serve as their own node identity, which is convenient for
/// grids that do not hand out dedicated handles.
impl GridNode for Point {
    #[inline]
    fn pos(&self) -> Point {
        *self
    }
}

/// Read-only access to the nodes of a grid.
///
/// The grid owns all node storage; a search only asks which nodes exist and
/// what entering them costs.
pub trait GridLookup {
    /// Node handle type handed out by this grid.
    type Node: GridNode;

    /// The node at `(x, y)` if it exists and is traversable.
    fn try_get_node(&self, x: i32, y: i32) -> Option<Self::Node>;

    /// Static cost of entering `node`. Must stay constant while a search runs.
    fn terrain_cost(&self, node: Self::Node) -> Cost;

    /// Whether `node` is a handle this grid handed out.
    ///
    /// Searches reject foreign origin or target handles up front. The default
    /// accepts every handle.
    fn owns(&self, node: Self::Node) -> bool {
        let _ = node;
        true
    }
}
