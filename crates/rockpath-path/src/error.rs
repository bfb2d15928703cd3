//! Error types for single-source search and path reconstruction.

use rockpath_core::{Coord3, Dims};
use std::fmt;

/// Errors from a shortest-path query.
///
/// `OutOfBounds` is fatal to the call that raised it. `Unreachable` is a
/// per-target status: other targets of the same search stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A source or target lies outside the grid.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord3,
        /// The grid dimensions.
        dims: Dims,
    },
    /// No chain of non-fluid cells links `source` to `target`.
    Unreachable {
        /// Search origin.
        source: Coord3,
        /// Requested target.
        target: Coord3,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, dims } => {
                write!(f, "coordinate {coord} out of bounds for {dims}")
            }
            Self::Unreachable { source, target } => {
                write!(f, "{target} is unreachable from {source}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
