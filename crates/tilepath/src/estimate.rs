use crate::traits::{Cost, GridNode};

/// Heuristic estimate of the remaining cost between two nodes.
///
/// With `dx` and `dy` the per-axis distances, the estimate is
/// `min(dx, dy) + 10 * |dx - dy|`: the diagonal part of the route counts one
/// per step, the straight remainder ten per step. The function is pure and
/// symmetric, and `estimate(a, a) == 0`. Distances too large for [`Cost`]
/// saturate at `Cost::MAX`.
#[inline]
pub fn estimate<N: GridNode>(a: N, b: N) -> Cost {
    let d = a.pos().abs_delta(b.pos());
    let straight = (d.x - d.y).abs().saturating_mul(10);
    d.x.min(d.y).saturating_add(straight)
}
