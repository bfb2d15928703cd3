//! Error types for volume construction and cell access.

use crate::id::Coord3;
use crate::volume::Dims;
use std::error::Error;
use std::fmt;

/// Errors arising from building or addressing a [`Volume`](crate::Volume)
/// or [`LabelMap`](crate::LabelMap).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VolumeError {
    /// At least one axis has zero extent.
    EmptyVolume,
    /// A buffer's length does not match the product of the dimensions.
    ShapeMismatch {
        /// Cell count implied by the dimensions.
        expected: usize,
        /// Length of the buffer actually supplied.
        got: usize,
    },
    /// Two grids that must share dimensions do not.
    DimsMismatch {
        /// Dimensions of the reference grid.
        expected: Dims,
        /// Dimensions of the grid supplied.
        got: Dims,
    },
    /// The product of the extents overflows `usize`.
    DimensionTooLarge {
        /// The rejected dimensions.
        dims: Dims,
    },
    /// A coordinate lies outside `[0, dim)` on some axis.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord3,
        /// The grid's dimensions.
        dims: Dims,
    },
}

impl fmt::Display for VolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVolume => write!(f, "volume must have at least one cell on every axis"),
            Self::ShapeMismatch { expected, got } => {
                write!(f, "buffer holds {got} cells, dimensions require {expected}")
            }
            Self::DimensionTooLarge { dims } => {
                write!(f, "dimensions {dims} hold more cells than fit in memory")
            }
            Self::DimsMismatch { expected, got } => {
                write!(f, "dimensions {got} do not match {expected}")
            }
            Self::CoordOutOfBounds { coord, dims } => {
                write!(f, "coordinate {coord} out of bounds for {dims}")
            }
        }
    }
}

impl Error for VolumeError {}
