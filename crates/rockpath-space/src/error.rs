//! Error types for topology construction and coordinate checks.

use rockpath_core::{Coord3, Dims};
use std::fmt;

/// Errors arising from lattice construction or neighbour queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Connectivity level outside `{6, 18, 26}`.
    InvalidConnectivity {
        /// The rejected level.
        value: u32,
    },
    /// A coordinate is outside the bounds of the lattice.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord3,
        /// The lattice dimensions.
        dims: Dims,
    },
    /// Attempted to construct a lattice with zero cells.
    EmptySpace,
    /// The lattice's cell count overflows `usize`.
    DimensionTooLarge {
        /// The rejected dimensions.
        dims: Dims,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnectivity { value } => {
                write!(f, "invalid connectivity {value}: choose 6, 18, or 26")
            }
            Self::CoordOutOfBounds { coord, dims } => {
                write!(f, "coordinate {coord} out of bounds for {dims}")
            }
            Self::EmptySpace => write!(f, "lattice must have at least one cell"),
            Self::DimensionTooLarge { dims } => {
                write!(f, "lattice {dims} has more cells than fit in usize")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
