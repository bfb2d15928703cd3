//! Neighbour topologies and per-step costs.

use crate::error::SpaceError;
use std::f64::consts::SQRT_2;
use std::fmt;

/// `√3`, the length of a corner-diagonal step.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The 6 face-sharing offsets: one non-zero axis.
static FACE_OFFSETS: [[i8; 3]; 6] = [
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
];

/// The 12 edge-sharing offsets: exactly two non-zero axes.
static EDGE_OFFSETS: [[i8; 3]; 12] = [
    [1, 1, 0],
    [1, -1, 0],
    [-1, 1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [1, 0, -1],
    [-1, 0, 1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, 1, -1],
    [0, -1, 1],
    [0, -1, -1],
];

/// The 8 corner-sharing offsets: all three axes non-zero.
static VERTEX_OFFSETS: [[i8; 3]; 8] = [
    [1, 1, 1],
    [1, 1, -1],
    [1, -1, 1],
    [1, -1, -1],
    [-1, 1, 1],
    [-1, 1, -1],
    [-1, -1, 1],
    [-1, -1, -1],
];

/// One neighbour direction and the cost of stepping along it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    /// Unit displacement in `{-1, 0, 1}³ \ {0}`.
    pub delta: [i8; 3],
    /// Euclidean length of `delta`: 1, √2, or √3.
    pub cost: f64,
}

impl Offset {
    fn new(delta: [i8; 3]) -> Self {
        let axes = delta.iter().filter(|&&d| d != 0).count();
        let cost = match axes {
            1 => 1.0,
            2 => SQRT_2,
            _ => SQRT_3,
        };
        Self { delta, cost }
    }
}

/// Which voxels count as neighbours.
///
/// # Examples
///
/// ```
/// use rockpath_space::Connectivity;
///
/// let c = Connectivity::try_from(18u32).unwrap();
/// assert_eq!(c, Connectivity::Edge18);
/// assert_eq!(c.offsets().count(), 18);
/// assert!(Connectivity::try_from(8u32).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// Shared faces only (Manhattan neighbours).
    Face6,
    /// Shared faces and shared edges.
    Edge18,
    /// Every voxel in the surrounding 3×3×3 block.
    #[default]
    Vertex26,
}

impl Connectivity {
    /// The numeric level: 6, 18, or 26.
    pub fn level(self) -> u32 {
        match self {
            Self::Face6 => 6,
            Self::Edge18 => 18,
            Self::Vertex26 => 26,
        }
    }

    /// Offsets in a fixed order: faces, then edges, then corners.
    pub fn offsets(self) -> impl Iterator<Item = Offset> {
        let edges: &'static [[i8; 3]] = match self {
            Self::Face6 => &[],
            Self::Edge18 | Self::Vertex26 => &EDGE_OFFSETS,
        };
        let vertices: &'static [[i8; 3]] = match self {
            Self::Vertex26 => &VERTEX_OFFSETS,
            Self::Face6 | Self::Edge18 => &[],
        };
        FACE_OFFSETS
            .iter()
            .chain(edges)
            .chain(vertices)
            .map(|&d| Offset::new(d))
    }
}

impl TryFrom<u32> for Connectivity {
    type Error = SpaceError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(Self::Face6),
            18 => Ok(Self::Edge18),
            26 => Ok(Self::Vertex26),
            _ => Err(SpaceError::InvalidConnectivity { value }),
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-connectivity", self.level())
    }
}
