//! Least-cost route search over 8-connected tile grids.
//!
//! A [`Pathfinder`] searches routes between two nodes of any grid that
//! implements [`GridLookup`]. The grid owns the nodes and answers which
//! coordinates are traversable; the pathfinder keeps all search state (costs,
//! predecessors, frontier) to itself.
//!
//! - **Search** — best-first expansion ordered by `g + h`
//!   ([`Pathfinder::find_path`])
//! - **Estimate** — the diagonal-weighted heuristic ([`estimate`])
//! - **Neighbors** — fixed-order 8-way enumeration ([`neighbors`],
//!   [`NEIGHBOR_OFFSETS`])
//! - **Reconstruction** — predecessor walk ([`Path::backtrack`])
//!
//! [`TileMap`] is a ready-made rectangular grid for hosts without their own
//! storage.
//!
//! ```
//! use tilepath::{GridLookup, Pathfinder, TileMap};
//!
//! let map = TileMap::parse("...\n.#.\n...", 10).unwrap();
//! let origin = map.try_get_node(0, 0).unwrap();
//! let target = map.try_get_node(2, 2).unwrap();
//!
//! let mut pf = Pathfinder::new();
//! let path = pf.find_path(&map, origin, target).unwrap().expect("reachable");
//! assert_eq!(path.origin(), origin);
//! assert_eq!(path.target(), target);
//! ```
//!
//! # Logging
//!
//! Search summaries are emitted at `debug` level and per-node expansions at
//! `trace` level through the [`log`] facade. A broken predecessor chain during
//! reconstruction is reported at `warn` level.

mod astar;
mod config;
mod error;
mod estimate;
mod frontier;
mod neighbors;
mod path;
mod pathfinder;
mod tilemap;
mod traits;

pub use config::{CostModel, PathfinderConfig};
pub use error::PathError;
pub use estimate::estimate;
pub use neighbors::{NEIGHBOR_OFFSETS, Neighbors, neighbors};
pub use path::Path;
pub use pathfinder::{Pathfinder, SearchStats};
pub use tilemap::{Tile, TileMap, TileMapError, TileRef};
pub use tilepath_core::{Point, Range};
pub use traits::{Cost, GridLookup, GridNode};
