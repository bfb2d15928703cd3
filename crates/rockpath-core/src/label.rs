//! Component label maps.

use crate::error::VolumeError;
use crate::id::{ComponentLabel, Coord3};
use crate::volume::Dims;

/// Per-cell component labels, co-indexed with a [`Volume`](crate::Volume).
///
/// Label 0 means "not assigned" (fluid cells). Labels `1..=N` map one to
/// one onto the `N` components produced by segmentation. A `LabelMap` is
/// produced once and is read-only to every downstream stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelMap {
    dims: Dims,
    labels: Vec<u32>,
    component_count: u32,
}

impl LabelMap {
    /// Wrap a raw label buffer. `component_count` is the highest label used.
    pub fn from_raw(dims: Dims, labels: Vec<u32>, component_count: u32) -> Result<Self, VolumeError> {
        let expected = dims.validated_cell_count()?;
        if labels.len() != expected {
            return Err(VolumeError::ShapeMismatch {
                expected,
                got: labels.len(),
            });
        }
        Ok(Self {
            dims,
            labels,
            component_count,
        })
    }

    /// A map over `dims` with every cell unassigned.
    ///
    /// `dims` should come from a constructed [`Volume`](crate::Volume).
    pub fn unassigned(dims: Dims) -> Self {
        Self {
            dims,
            labels: vec![0; dims.cell_count()],
            component_count: 0,
        }
    }

    /// Assign `label` to the cell at a flat index. Panics if out of range.
    pub fn assign(&mut self, index: usize, label: ComponentLabel) {
        self.labels[index] = label.0;
        self.component_count = self.component_count.max(label.0);
    }

    /// Grid dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of components (the highest label).
    pub fn component_count(&self) -> u32 {
        self.component_count
    }

    /// All labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = ComponentLabel> {
        (1..=self.component_count).map(ComponentLabel)
    }

    /// Label at `coord`; `None` if unassigned or out of bounds.
    pub fn get(&self, coord: Coord3) -> Option<ComponentLabel> {
        if !self.dims.contains(coord) {
            return None;
        }
        match self.labels[self.dims.index_of(coord)] {
            0 => None,
            l => Some(ComponentLabel(l)),
        }
    }

    /// Raw label at a flat index (0 = unassigned).
    #[inline]
    pub fn raw_at(&self, index: usize) -> u32 {
        self.labels[index]
    }

    /// `true` if the cell at `index` belongs to `label`.
    #[inline]
    pub fn is_labelled(&self, index: usize, label: ComponentLabel) -> bool {
        self.labels[index] == label.0
    }

    /// Read-only view of the raw label buffer.
    pub fn as_slice(&self) -> &[u32] {
        &self.labels
    }

    /// Number of cells carrying `label`.
    pub fn size_of(&self, label: ComponentLabel) -> usize {
        self.labels.iter().filter(|&&l| l == label.0).count()
    }

    /// Coordinates carrying `label`, in canonical order.
    pub fn cells_of(&self, label: ComponentLabel) -> Vec<Coord3> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == label.0)
            .map(|(i, _)| self.dims.coord_of(i))
            .collect()
    }
}
