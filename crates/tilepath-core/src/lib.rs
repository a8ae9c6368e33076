//! **tilepath-core** — geometry primitives shared by the *tilepath* crates.
//!
//! Grid cells are addressed by integer [`Point`]s; rectangular grid extents
//! are described by half-open [`Range`]s.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
