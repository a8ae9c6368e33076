//! A fixed-size in-memory grid implementing [`GridLookup`].
//!
//! Hosts with their own world storage implement [`GridLookup`] directly;
//! [`TileMap`] covers the simple case of a rectangular board.

use std::fmt;

use tilepath_core::{Point, Range};

use crate::traits::{Cost, GridLookup, GridNode};

/// Static data for one cell of a [`TileMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub terrain_cost: Cost,
    pub walkable: bool,
}

impl Tile {
    pub const fn open(terrain_cost: Cost) -> Self {
        Self {
            terrain_cost,
            walkable: true,
        }
    }

    pub const fn blocked(terrain_cost: Cost) -> Self {
        Self {
            terrain_cost,
            walkable: false,
        }
    }
}

/// Handle to a tile of a [`TileMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TileRef {
    index: usize,
    pos: Point,
}

impl TileRef {
    /// Row-major index of the tile in its map.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl GridNode for TileRef {
    #[inline]
    fn pos(&self) -> Point {
        self.pos
    }
}

/// Rectangular grid of [`Tile`]s with its top-left corner at (0, 0).
///
/// Blocked tiles are absent from [`GridLookup::try_get_node`] but can still be
/// addressed through [`TileMap::node`], e.g. to ask for a route to a cell that
/// cannot be entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    bounds: Range,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Create a fully walkable map. Negative sizes yield an empty map.
    pub fn new(width: i32, height: i32, terrain_cost: Cost) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            bounds,
            tiles: vec![Tile::open(terrain_cost); bounds.len()],
        }
    }

    /// Build a map from ASCII art, one text line per row (top row is y = 0).
    ///
    /// - `.` walkable at `default_cost`
    /// - `#` blocked
    /// - `1`–`9` walkable with that terrain cost
    pub fn parse(text: &str, default_cost: Cost) -> Result<Self, TileMapError> {
        let rows: Vec<&str> = text.lines().collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 {
            return Err(TileMapError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(TileMapError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let tile = match glyph {
                    '.' => Tile::open(default_cost),
                    '#' => Tile::blocked(default_cost),
                    '1'..='9' => Tile::open(Cost::from(glyph as u8 - b'0')),
                    _ => {
                        return Err(TileMapError::InvalidGlyph {
                            glyph,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                tiles.push(tile);
            }
        }

        Ok(Self {
            bounds: Range::new(0, 0, width as i32, rows.len() as i32),
            tiles,
        })
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Handle to the tile at `(x, y)`, walkable or not.
    pub fn node(&self, x: i32, y: i32) -> Option<TileRef> {
        let pos = Point::new(x, y);
        let index = self.bounds.index_of(pos)?;
        Some(TileRef { index, pos })
    }

    /// Tile data at `p`.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        let i = self.bounds.index_of(p)?;
        self.tiles.get(i).copied()
    }

    /// Mark the tile at `p` walkable or blocked. Returns `false` if `p` is
    /// outside the map.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> bool {
        match self.tile_mut(p) {
            Some(t) => {
                t.walkable = walkable;
                true
            }
            None => false,
        }
    }

    /// Change the terrain cost of the tile at `p`. Returns `false` if `p` is
    /// outside the map.
    pub fn set_terrain_cost(&mut self, p: Point, terrain_cost: Cost) -> bool {
        match self.tile_mut(p) {
            Some(t) => {
                t.terrain_cost = terrain_cost;
                true
            }
            None => false,
        }
    }

    fn tile_mut(&mut self, p: Point) -> Option<&mut Tile> {
        let i = self.bounds.index_of(p)?;
        self.tiles.get_mut(i)
    }
}

impl GridLookup for TileMap {
    type Node = TileRef;

    fn try_get_node(&self, x: i32, y: i32) -> Option<TileRef> {
        let node = self.node(x, y)?;
        self.tiles[node.index].walkable.then_some(node)
    }

    /// Foreign handles cost nothing; searches reject them before expanding.
    fn terrain_cost(&self, node: TileRef) -> Cost {
        self.tiles.get(node.index).map_or(0, |t| t.terrain_cost)
    }

    /// A handle belongs to this map when its index and position agree with
    /// the map's layout.
    fn owns(&self, node: TileRef) -> bool {
        self.bounds.index_of(node.pos) == Some(node.index)
    }
}

/// Errors that can occur when parsing a [`TileMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileMapError {
    /// No rows, or an empty first row.
    Empty,
    /// A row's length differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the accepted glyph set.
    InvalidGlyph { glyph: char, pos: Point },
}

impl fmt::Display for TileMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "tile map: no tiles"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "tile map: row {row} has {found} tiles, expected {expected}"
            ),
            Self::InvalidGlyph { glyph, pos } => {
                write!(f, "tile map: invalid glyph \u{201c}{glyph}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for TileMapError {}
