//! Strongly-typed identifiers: voxel coordinates and component labels.

use std::fmt;

/// Integer position of a voxel within a [`Volume`](crate::Volume).
///
/// Axes follow the volume's storage order: `x` is the slowest-varying
/// axis and `z` the fastest. Coordinates are unsigned; bounds are checked
/// against [`Dims`](crate::Dims) by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord3 {
    /// Position along the first (slowest) axis.
    pub x: usize,
    /// Position along the second axis.
    pub y: usize,
    /// Position along the third (fastest) axis.
    pub z: usize,
}

impl Coord3 {
    /// Construct a coordinate from its three components.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Apply a signed unit offset, returning `None` if any axis would
    /// become negative. Upper bounds are not checked here.
    pub fn offset(self, delta: [i8; 3]) -> Option<Self> {
        Some(Self {
            x: shift(self.x, delta[0])?,
            y: shift(self.y, delta[1])?,
            z: shift(self.z, delta[2])?,
        })
    }

    /// Components as an array, in axis order.
    pub fn to_array(self) -> [usize; 3] {
        [self.x, self.y, self.z]
    }
}

fn shift(v: usize, d: i8) -> Option<usize> {
    if d < 0 {
        v.checked_sub(d.unsigned_abs() as usize)
    } else {
        v.checked_add(d as usize)
    }
}

impl From<[usize; 3]> for Coord3 {
    fn from(v: [usize; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<(usize, usize, usize)> for Coord3 {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Coord3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Identifies one connected component produced by segmentation.
///
/// Labels start at 1 and are dense: `ComponentLabel(n)` corresponds to
/// the n-th sub-volume. Label 0 is reserved for "not assigned" and is
/// never handed out as a `ComponentLabel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentLabel(pub u32);

impl ComponentLabel {
    /// Zero-based position of this label in label-ordered collections.
    pub fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }
}

impl fmt::Display for ComponentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ComponentLabel {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_rejects_negative_axes() {
        let c = Coord3::new(0, 2, 1);
        assert_eq!(c.offset([-1, 0, 0]), None);
        assert_eq!(c.offset([0, -1, -1]), Some(Coord3::new(0, 1, 0)));
        assert_eq!(c.offset([1, 1, 1]), Some(Coord3::new(1, 3, 2)));
    }

    #[test]
    fn coord_conversions_agree() {
        let a: Coord3 = [1, 2, 3].into();
        let b: Coord3 = (1, 2, 3).into();
        assert_eq!(a, b);
        assert_eq!(a.to_array(), [1, 2, 3]);
        assert_eq!(a.to_string(), "(1, 2, 3)");
    }

    #[test]
    fn label_index_is_zero_based() {
        assert_eq!(ComponentLabel(1).index(), 0);
        assert_eq!(ComponentLabel(7).index(), 6);
        assert_eq!(ComponentLabel::from(3).to_string(), "3");
    }
}
