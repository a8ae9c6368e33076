use std::collections::HashSet;

use tilepath_core::Point;

use crate::traits::{Cost, GridLookup, GridNode};

/// A route from origin to target, both inclusive, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path<N> {
    nodes: Vec<N>,
    contiguous: bool,
}

impl<N: GridNode> Path<N> {
    /// Rebuild a route by following predecessor links back from `target`.
    ///
    /// Walking stops at `origin`, or early at a node without a predecessor
    /// (or one already walked). `origin` is always the first node of the
    /// result. An early stop is logged and leaves the path non-contiguous,
    /// see [`Path::is_contiguous`].
    pub fn backtrack<F>(target: N, origin: N, mut previous: F) -> Self
    where
        F: FnMut(N) -> Option<N>,
    {
        let mut nodes = Vec::new();
        let mut seen = HashSet::new();
        let mut contiguous = true;
        let mut current = target;

        while current != origin {
            if !seen.insert(current) {
                contiguous = false;
                break;
            }
            nodes.push(current);
            let Some(prev) = previous(current) else {
                contiguous = false;
                break;
            };
            current = prev;
        }

        if !contiguous {
            log::warn!(
                "predecessor chain from {} broke at {} before reaching origin {}",
                target.pos(),
                current.pos(),
                origin.pos()
            );
        }

        nodes.push(origin);
        nodes.reverse();
        Self { nodes, contiguous }
    }

    /// First node of the route.
    pub fn origin(&self) -> N {
        self.nodes[0]
    }

    /// Last node of the route.
    pub fn target(&self) -> N {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of nodes, endpoints included. At least 1.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a path holds at least its origin.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether every node was reached through predecessor links.
    pub fn is_contiguous(&self) -> bool {
        self.contiguous
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// Coordinates of the nodes, in order.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|n| n.pos())
    }

    /// Offset taken by each step, `len() - 1` items.
    pub fn steps(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.windows(2).map(|w| w[1].pos() - w[0].pos())
    }

    /// Sum of terrain costs of every node entered after the origin.
    pub fn terrain_cost<G>(&self, grid: &G) -> Cost
    where
        G: GridLookup<Node = N> + ?Sized,
    {
        self.nodes[1..]
            .iter()
            .map(|&n| grid.terrain_cost(n))
            .fold(0, Cost::saturating_add)
    }
}

// A path always holds its origin, so empty node lists are rejected.
#[cfg(feature = "serde")]
impl<'de, N> serde::Deserialize<'de> for Path<N>
where
    N: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw<N> {
            nodes: Vec<N>,
            contiguous: bool,
        }

        let raw = <Raw<N> as serde::Deserialize>::deserialize(deserializer)?;
        if raw.nodes.is_empty() {
            return Err(serde::de::Error::custom("path has no nodes"));
        }
        Ok(Self {
            nodes: raw.nodes,
            contiguous: raw.contiguous,
        })
    }
}

impl<N> IntoIterator for Path<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
