//! Dense 3-D voxel volumes and their dimensions.
//!
//! A [`Volume`] is a flat `Vec<u8>` in row-major order: `x` is the
//! slowest axis and `z` the fastest, so a raw byte dump of shape
//! `(X, Y, Z)` loads directly with [`Volume::from_raw`]. Dimensions are
//! fixed for the lifetime of a volume.

use crate::cell::{CellValues, VolumeCensus};
use crate::error::VolumeError;
use crate::id::Coord3;
use std::fmt;

/// Extent of a volume along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    /// Extent along `x` (slowest axis).
    pub x: usize,
    /// Extent along `y`.
    pub y: usize,
    /// Extent along `z` (fastest axis).
    pub z: usize,
}

impl Dims {
    /// Construct dimensions from three extents.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Total number of cells, saturating at `usize::MAX`.
    ///
    /// Exact for the dimensions of any constructed [`Volume`].
    pub fn cell_count(&self) -> usize {
        self.x.saturating_mul(self.y).saturating_mul(self.z)
    }

    /// Total number of cells, or `None` if the product overflows `usize`.
    pub fn checked_cell_count(&self) -> Option<usize> {
        self.x.checked_mul(self.y)?.checked_mul(self.z)
    }

    /// Validate the dimensions for allocation and return the cell count.
    ///
    /// `EmptyVolume` if any axis is zero; `DimensionTooLarge` if the cell
    /// count overflows `usize`.
    pub fn validated_cell_count(&self) -> Result<usize, VolumeError> {
        if self.is_empty() {
            return Err(VolumeError::EmptyVolume);
        }
        self.checked_cell_count()
            .ok_or(VolumeError::DimensionTooLarge { dims: *self })
    }

    /// `true` if any axis has zero extent.
    pub fn is_empty(&self) -> bool {
        self.x == 0 || self.y == 0 || self.z == 0
    }

    /// `true` if `coord` lies inside `[0, dim)` on every axis.
    #[inline]
    pub fn contains(&self, coord: Coord3) -> bool {
        coord.x < self.x && coord.y < self.y && coord.z < self.z
    }

    /// Flat index of an in-bounds coordinate. No bounds check.
    #[inline]
    pub fn index_of(&self, coord: Coord3) -> usize {
        (coord.x * self.y + coord.y) * self.z + coord.z
    }

    /// Flat index of `coord`, or an error if it lies outside the grid.
    pub fn checked_index(&self, coord: Coord3) -> Result<usize, VolumeError> {
        if self.contains(coord) {
            Ok(self.index_of(coord))
        } else {
            Err(VolumeError::CoordOutOfBounds { coord, dims: *self })
        }
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord3 {
        let z = index % self.z;
        let rest = index / self.z;
        Coord3::new(rest / self.y, rest % self.y, z)
    }

    /// Step from `coord` by a unit offset, returning `None` if the result
    /// falls outside the grid. Boundary cells simply have fewer neighbours;
    /// there is no wraparound.
    #[inline]
    pub fn step(&self, coord: Coord3, delta: [i8; 3]) -> Option<Coord3> {
        coord.offset(delta).filter(|c| self.contains(*c))
    }

    /// All coordinates in canonical (storage) order.
    pub fn coords(&self) -> impl Iterator<Item = Coord3> + '_ {
        (0..self.cell_count()).map(move |i| self.coord_of(i))
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

/// A dense 3-D grid of small unsigned integers.
///
/// Cell meaning comes from a [`CellValues`] pair supplied by the caller:
/// fluid, plain solid, or sample (any other value).
#[derive(Clone, PartialEq, Eq)]
pub struct Volume {
    dims: Dims,
    cells: Vec<u8>,
}

impl Volume {
    /// Create a volume with every cell set to `fill`.
    ///
    /// Returns `Err(VolumeError::EmptyVolume)` if any axis is zero and
    /// `Err(VolumeError::DimensionTooLarge)` if the cell count overflows.
    pub fn filled(dims: Dims, fill: u8) -> Result<Self, VolumeError> {
        let count = dims.validated_cell_count()?;
        Ok(Self {
            dims,
            cells: vec![fill; count],
        })
    }

    /// Wrap a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// `EmptyVolume` if any axis is zero; `DimensionTooLarge` if the
    /// cell count overflows `usize`; `ShapeMismatch` if the buffer length
    /// differs from the cell count.
    pub fn from_raw(dims: Dims, cells: Vec<u8>) -> Result<Self, VolumeError> {
        let expected = dims.validated_cell_count()?;
        if cells.len() != expected {
            return Err(VolumeError::ShapeMismatch {
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { dims, cells })
    }

    /// Grid dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Value at `coord`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, coord: Coord3) -> Option<u8> {
        if self.dims.contains(coord) {
            Some(self.cells[self.dims.index_of(coord)])
        } else {
            None
        }
    }

    /// Value at a flat index. Panics if out of range.
    #[inline]
    pub fn at(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Overwrite the value at `coord`.
    pub fn set(&mut self, coord: Coord3, value: u8) -> Result<(), VolumeError> {
        let index = self.dims.checked_index(coord)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Read-only view of the row-major cell buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Mutable view of the row-major cell buffer.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Consume the volume, returning its row-major buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.cells
    }

    /// Count cells per semantic class.
    pub fn census(&self, values: &CellValues) -> VolumeCensus {
        let mut census = VolumeCensus::default();
        for &v in &self.cells {
            census.record(values.classify(v));
        }
        census
    }

    /// Coordinates of every sample cell, in canonical order.
    pub fn sample_cells(&self, values: &CellValues) -> Vec<Coord3> {
        self.cells_where(|v| values.is_sample(v))
    }

    /// Coordinates of every non-fluid cell, in canonical order.
    pub fn occupied_cells(&self, values: &CellValues) -> Vec<Coord3> {
        self.cells_where(|v| values.is_occupied(v))
    }

    /// Coordinates whose value satisfies `pred`, in canonical order.
    pub fn cells_where(&self, mut pred: impl FnMut(u8) -> bool) -> Vec<Coord3> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| pred(v))
            .map(|(i, _)| self.dims.coord_of(i))
            .collect()
    }
}

impl fmt::Debug for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Volume")
            .field("dims", &self.dims)
            .field("cells", &self.cells.len())
            .finish()
    }
}
