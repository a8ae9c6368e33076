use std::fmt;

use tilepath_core::Point;

/// Caller errors detected before a search starts.
///
/// An unreachable target is not an error; [`find_path`] reports it as
/// `Ok(None)`.
///
/// [`find_path`]: crate::Pathfinder::find_path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The origin handle does not belong to the grid being searched.
    UnknownOrigin(Point),
    /// The target handle does not belong to the grid being searched.
    UnknownTarget(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOrigin(p) => write!(f, "origin {p} is not a node of this grid"),
            Self::UnknownTarget(p) => write!(f, "target {p} is not a node of this grid"),
        }
    }
}

impl std::error::Error for PathError {}
