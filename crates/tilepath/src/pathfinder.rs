use std::collections::HashMap;

use crate::config::PathfinderConfig;
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::traits::{Cost, GridNode};

// ---------------------------------------------------------------------------
// Per-search scratch state
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    /// On the frontier, with the sequence number it arrived under.
    Open { seq: usize },
    /// Expanded; never expanded again during this search.
    Visited,
}

/// Search bookkeeping for one node, keyed by node identity.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scratch<N> {
    /// Cost from origin.
    pub(crate) g: Cost,
    /// Estimated cost to target.
    pub(crate) h: Cost,
    pub(crate) previous: Option<N>,
    pub(crate) state: NodeState,
}

impl<N> Scratch<N> {
    #[inline]
    pub(crate) fn total(&self) -> Cost {
        self.g.saturating_add(self.h)
    }
}

// ---------------------------------------------------------------------------
// SearchStats
// ---------------------------------------------------------------------------

/// Counters describing the most recent search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes moved from the frontier to the visited set.
    pub expanded: usize,
    /// Distinct nodes that joined the frontier, origin included.
    pub discovered: usize,
    /// Largest number of nodes on the frontier at once.
    pub frontier_peak: usize,
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Best-first route search over a [`GridLookup`](crate::GridLookup).
///
/// The pathfinder owns its scratch state (costs, predecessors, frontier) and
/// reuses the allocations between searches; nodes owned by the grid are never
/// written. Each search starts from an empty state, so results do not depend
/// on earlier calls. Separate `Pathfinder` values may search the same grid
/// independently.
#[derive(Debug)]
pub struct Pathfinder<N> {
    pub(crate) config: PathfinderConfig,
    pub(crate) scratch: HashMap<N, Scratch<N>>,
    pub(crate) frontier: Frontier<N>,
    pub(crate) nbuf: Neighbors<N>,
    pub(crate) stats: SearchStats,
    pub(crate) open_count: usize,
}

impl<N: GridNode> Default for Pathfinder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: GridNode> Pathfinder<N> {
    /// Create a pathfinder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(PathfinderConfig::default())
    }

    /// Create a pathfinder with the given configuration.
    pub fn with_config(config: PathfinderConfig) -> Self {
        Self {
            config,
            scratch: HashMap::new(),
            frontier: Frontier::new(),
            nbuf: Neighbors::new(),
            stats: SearchStats::default(),
            open_count: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> PathfinderConfig {
        self.config
    }

    /// Replace the configuration used by later searches.
    pub fn set_config(&mut self, config: PathfinderConfig) {
        self.config = config;
    }

    /// Counters for the most recent [`find_path`](Self::find_path) call.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Drop all per-search state, keeping allocations.
    pub(crate) fn reset(&mut self) {
        self.scratch.clear();
        self.frontier.clear();
        self.stats = SearchStats::default();
        self.open_count = 0;
    }

    /// Put a newly discovered node on the frontier.
    pub(crate) fn open(&mut self, node: N, g: Cost, h: Cost, previous: Option<N>) {
        let seq = self.frontier.insert(node, g.saturating_add(h));
        self.scratch.insert(
            node,
            Scratch {
                g,
                h,
                previous,
                state: NodeState::Open { seq },
            },
        );
        self.stats.discovered += 1;
        self.open_count += 1;
        self.stats.frontier_peak = self.stats.frontier_peak.max(self.open_count);
    }
}

// Only the configuration is persisted; scratch state is rebuilt per search.
#[cfg(feature = "serde")]
impl<N> serde::Serialize for Pathfinder<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.config, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, N: GridNode> serde::Deserialize<'de> for Pathfinder<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let config = <PathfinderConfig as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Pathfinder::with_config(config))
    }
}
