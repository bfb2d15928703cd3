//! Error types for the interpolation seam.

use rockpath_core::VolumeError;
use std::error::Error;
use std::fmt;

/// Errors from interpolating measured samples across solid cells.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// The volume holds no sample cells to interpolate from.
    EmptyInput,
    /// An estimator returned a grid of the wrong length.
    EstimateShape {
        /// Expected number of values (the volume's cell count).
        expected: usize,
        /// Number of values actually returned.
        got: usize,
    },
    /// The estimator itself failed.
    Estimator {
        /// Estimator name, from [`Interpolator::name`](crate::Interpolator::name).
        name: String,
        /// Human-readable failure description.
        reason: String,
    },
    /// Building the output volume failed.
    Volume(VolumeError),
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "no sample cells: provide measurements for interpolation")
            }
            Self::EstimateShape { expected, got } => {
                write!(f, "estimate has {got} values, expected {expected}")
            }
            Self::Estimator { name, reason } => write!(f, "estimator '{name}' failed: {reason}"),
            Self::Volume(e) => write!(f, "volume error: {e}"),
        }
    }
}

impl Error for InterpolationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Volume(e) => Some(e),
            _ => None,
        }
    }
}

impl From<VolumeError> for InterpolationError {
    fn from(e: VolumeError) -> Self {
        Self::Volume(e)
    }
}
