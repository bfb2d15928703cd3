//! Bounded 3-D voxel lattice with configurable connectivity.
//!
//! # Coordinate System
//!
//! Unsigned triples `(x, y, z)` with `0 <= x < X`, `0 <= y < Y`,
//! `0 <= z < Z`. Canonical ordering is x-then-y-then-z with `z` fastest,
//! matching the storage order of [`Volume`](rockpath_core::Volume), so a
//! cell's canonical rank is its flat buffer index.
//!
//! # Edge Behavior
//!
//! Offsets that leave the grid are dropped. Boundary voxels have fewer
//! neighbours: a corner has 3 under 6-connectivity, 6 under 18, 7 under 26.

use crate::connectivity::Connectivity;
use crate::error::SpaceError;
use rockpath_core::{Coord3, Dims, Volume};
use smallvec::SmallVec;

/// Neighbour list: `(coordinate, step cost)` pairs.
///
/// Sized inline for the full 26-neighbourhood so enumeration never
/// allocates.
pub type Neighbours = SmallVec<[(Coord3, f64); 26]>;

/// A three-dimensional voxel lattice.
///
/// Combines grid [`Dims`] with a [`Connectivity`] to answer "who are my
/// neighbours and what does it cost to reach them".
///
/// # Examples
///
/// ```
/// use rockpath_core::{Coord3, Dims, Volume};
/// use rockpath_space::{Connectivity, Lattice3};
///
/// let lattice = Lattice3::new(Dims::new(3, 3, 3), Connectivity::Vertex26).unwrap();
/// assert_eq!(lattice.neighbours(Coord3::new(1, 1, 1)).len(), 26);
/// assert_eq!(lattice.neighbours(Coord3::new(0, 0, 0)).len(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice3 {
    dims: Dims,
    connectivity: Connectivity,
}

impl Lattice3 {
    /// Create a lattice over `dims` with the given connectivity.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if any dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if the cell count overflows
    /// `usize`.
    pub fn new(dims: Dims, connectivity: Connectivity) -> Result<Self, SpaceError> {
        if dims.is_empty() {
            return Err(SpaceError::EmptySpace);
        }
        if dims.checked_cell_count().is_none() {
            return Err(SpaceError::DimensionTooLarge { dims });
        }
        Ok(Self { dims, connectivity })
    }

    /// Lattice spanning an existing volume. Volumes always hold at least
    /// one cell, so this cannot fail.
    pub fn of_volume(volume: &Volume, connectivity: Connectivity) -> Self {
        Self {
            dims: volume.dims(),
            connectivity,
        }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Neighbour topology.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.dims.cell_count()
    }

    /// Check that `coord` is in bounds and return its flat index.
    pub fn check_bounds(&self, coord: Coord3) -> Result<usize, SpaceError> {
        if self.dims.contains(coord) {
            Ok(self.dims.index_of(coord))
        } else {
            Err(SpaceError::CoordOutOfBounds {
                coord,
                dims: self.dims,
            })
        }
    }

    /// In-bounds neighbours of `coord` with their step costs, in the
    /// fixed offset order of [`Connectivity::offsets`].
    pub fn neighbours(&self, coord: Coord3) -> Neighbours {
        let mut result = SmallVec::new();
        for offset in self.connectivity.offsets() {
            if let Some(nb) = self.dims.step(coord, offset.delta) {
                result.push((nb, offset.cost));
            }
        }
        result
    }

    /// Number of in-bounds neighbours of `coord`.
    pub fn degree(&self, coord: Coord3) -> usize {
        self.connectivity
            .offsets()
            .filter(|o| self.dims.step(coord, o.delta).is_some())
            .count()
    }

    /// `true` if at least one neighbour position of `coord` lies outside
    /// the grid.
    pub fn touches_boundary(&self, coord: Coord3) -> bool {
        self.connectivity
            .offsets()
            .any(|o| self.dims.step(coord, o.delta).is_none())
    }

    /// Largest neighbour count of any cell in this lattice.
    pub fn max_neighbour_degree(&self) -> usize {
        // Interior cells along each axis exist only for extents >= 3; the
        // best cell sits at index 1 of every axis that has one.
        let best = Coord3::new(
            usize::from(self.dims.x > 1),
            usize::from(self.dims.y > 1),
            usize::from(self.dims.z > 1),
        );
        self.degree(best)
    }

    /// All cells in canonical order.
    pub fn canonical_ordering(&self) -> Vec<Coord3> {
        self.dims.coords().collect()
    }

    /// Position of `coord` in the canonical ordering.
    pub fn canonical_rank(&self, coord: Coord3) -> Option<usize> {
        self.check_bounds(coord).ok()
    }
}
