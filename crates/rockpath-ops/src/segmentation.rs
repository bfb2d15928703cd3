//! Connected-component segmentation of occupied voxels.
//!
//! Every non-fluid cell is "occupied". Two occupied cells belong to the
//! same component when a chain of occupied cells links them under the
//! segmenter's connectivity (26 by default), regardless of whether the
//! cells are plain solid or samples.
//!
//! Labelling is an explicit breadth-first flood fill seeded in canonical
//! scan order, so label 1 is the component holding the first occupied
//! cell, label 2 the next unlabelled one, and so on. The result is fully
//! deterministic.

use rockpath_core::{CellValues, ComponentLabel, LabelMap, Volume};
use rockpath_space::{Connectivity, Lattice3};
use std::collections::VecDeque;
use tracing::debug;

/// Flood-fill labeller for occupied voxels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentSegmenter {
    values: CellValues,
    connectivity: Connectivity,
}

impl ComponentSegmenter {
    /// Segmenter with 26-connectivity.
    pub fn new(values: CellValues) -> Self {
        Self {
            values,
            connectivity: Connectivity::Vertex26,
        }
    }

    /// Override the adjacency rule used to join cells.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Reserved cell values.
    pub fn values(&self) -> CellValues {
        self.values
    }

    /// Adjacency rule.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Label every occupied cell. Fluid cells keep label 0.
    pub fn label(&self, volume: &Volume) -> LabelMap {
        let lattice = Lattice3::of_volume(volume, self.connectivity);
        let dims = volume.dims();
        let mut labels = LabelMap::unassigned(dims);
        let mut queue = VecDeque::new();
        let mut next = 1u32;

        for seed in 0..volume.cell_count() {
            if !self.values.is_occupied(volume.at(seed)) || labels.raw_at(seed) != 0 {
                continue;
            }
            let label = ComponentLabel(next);
            next += 1;
            labels.assign(seed, label);
            queue.clear();
            queue.push_back(seed);

            while let Some(index) = queue.pop_front() {
                for (nb, _) in lattice.neighbours(dims.coord_of(index)) {
                    let nb_index = dims.index_of(nb);
                    if labels.raw_at(nb_index) == 0 && self.values.is_occupied(volume.at(nb_index)) {
                        labels.assign(nb_index, label);
                        queue.push_back(nb_index);
                    }
                }
            }
        }

        labels
    }

    /// Split `volume` into one sub-volume per component.
    ///
    /// Each sub-volume has the full dimensions of `volume`; cells outside
    /// the component are forced to the fluid value.
    pub fn segment(&self, volume: &Volume) -> Segmentation {
        let label_map = self.label(volume);
        let count = label_map.component_count() as usize;

        let mut blank = volume.clone();
        blank.as_bytes_mut().fill(self.values.fluid);
        let mut sub_volumes = vec![blank; count];
        let mut sizes = vec![0usize; count];
        let mut sample_counts = vec![0usize; count];

        for (index, &raw) in label_map.as_slice().iter().enumerate() {
            if raw == 0 {
                continue;
            }
            let slot = ComponentLabel(raw).index();
            let value = volume.at(index);
            sub_volumes[slot].as_bytes_mut()[index] = value;
            sizes[slot] += 1;
            if self.values.is_sample(value) {
                sample_counts[slot] += 1;
            }
        }

        debug!(
            components = count,
            dims = %volume.dims(),
            connectivity = self.connectivity.level(),
            "segmented volume"
        );

        Segmentation {
            label_map,
            sub_volumes,
            sizes,
            sample_counts,
        }
    }
}

/// Segment with 26-connectivity.
pub fn segment_components(volume: &Volume, values: &CellValues) -> Segmentation {
    ComponentSegmenter::new(*values).segment(volume)
}

/// Result of segmentation: a label map plus one sub-volume per label.
///
/// Labels run `1..=component_count()` with no gaps; sub-volumes are stored
/// in label order.
#[derive(Clone, Debug)]
pub struct Segmentation {
    label_map: LabelMap,
    sub_volumes: Vec<Volume>,
    sizes: Vec<usize>,
    sample_counts: Vec<usize>,
}

impl Segmentation {
    /// Number of components found.
    pub fn component_count(&self) -> usize {
        self.sub_volumes.len()
    }

    /// `true` if the volume held no occupied cells.
    pub fn is_empty(&self) -> bool {
        self.sub_volumes.is_empty()
    }

    /// The shared label map.
    pub fn label_map(&self) -> &LabelMap {
        &self.label_map
    }

    /// All labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = ComponentLabel> {
        self.label_map.labels()
    }

    /// Sub-volume for `label`, or `None` if no such component exists.
    pub fn sub_volume(&self, label: ComponentLabel) -> Option<&Volume> {
        self.slot(label).map(|i| &self.sub_volumes[i])
    }

    /// All sub-volumes in label order.
    pub fn sub_volumes(&self) -> &[Volume] {
        &self.sub_volumes
    }

    /// Occupied cell count per component, in label order.
    pub fn component_sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Occupied cell count of one component (0 for unknown labels).
    pub fn size_of(&self, label: ComponentLabel) -> usize {
        self.slot(label).map_or(0, |i| self.sizes[i])
    }

    /// Sample cell count of one component (0 for unknown labels).
    pub fn sample_count(&self, label: ComponentLabel) -> usize {
        self.slot(label).map_or(0, |i| self.sample_counts[i])
    }

    /// `(label, sub_volume)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentLabel, &Volume)> {
        self.labels().zip(self.sub_volumes.iter())
    }

    /// Take ownership of the sub-volumes and the label map.
    pub fn into_parts(self) -> (Vec<Volume>, LabelMap) {
        (self.sub_volumes, self.label_map)
    }

    fn slot(&self, label: ComponentLabel) -> Option<usize> {
        if label.0 == 0 {
            return None;
        }
        let i = label.index();
        (i < self.sub_volumes.len()).then_some(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rockpath_core::{Coord3, Dims};

    fn c(x: usize, y: usize, z: usize) -> Coord3 {
        Coord3::new(x, y, z)
    }

    fn fluid_volume(x: usize, y: usize, z: usize) -> Volume {
        Volume::filled(Dims::new(x, y, z), 1).unwrap()
    }

    #[test]
    fn all_fluid_has_no_components() {
        let seg = segment_components(&fluid_volume(3, 3, 3), &CellValues::default());
        assert!(seg.is_empty());
        assert_eq!(seg.component_count(), 0);
        assert_eq!(seg.labels().count(), 0);
        assert!(seg.label_map().as_slice().iter().all(|&l| l == 0));
    }

    #[test]
    fn singleton_voxel_is_its_own_component() {
        let mut v = fluid_volume(3, 3, 3);
        v.set(c(1, 1, 1), 0).unwrap();
        let seg = segment_components(&v, &CellValues::default());
        assert_eq!(seg.component_count(), 1);
        assert_eq!(seg.component_sizes(), &[1]);
        assert_eq!(seg.label_map().get(c(1, 1, 1)), Some(ComponentLabel(1)));
    }

    #[test]
    fn corner_contact_joins_under_26_only() {
        let mut v = fluid_volume(2, 2, 2);
        v.set(c(0, 0, 0), 0).unwrap();
        v.set(c(1, 1, 1), 0).unwrap();
        let values = CellValues::default();

        let seg = segment_components(&v, &values);
        assert_eq!(seg.component_count(), 1);

        let face = ComponentSegmenter::new(values).with_connectivity(Connectivity::Face6);
        assert_eq!(face.segment(&v).component_count(), 2);
        let edge = ComponentSegmenter::new(values).with_connectivity(Connectivity::Edge18);
        assert_eq!(edge.segment(&v).component_count(), 2);
    }

    #[test]
    fn solid_and_sample_cells_merge() {
        let mut v = fluid_volume(1, 1, 3);
        v.set(c(0, 0, 0), 0).unwrap();
        v.set(c(0, 0, 1), 42).unwrap();
        let seg = segment_components(&v, &CellValues::default());
        assert_eq!(seg.component_count(), 1);
        assert_eq!(seg.sample_count(ComponentLabel(1)), 1);
        assert_eq!(seg.size_of(ComponentLabel(1)), 2);
    }

    #[test]
    fn labels_follow_scan_order() {
        // Two slabs separated by a fluid gap along x.
        let mut v = fluid_volume(5, 2, 2);
        for y in 0..2 {
            for z in 0..2 {
                v.set(c(0, y, z), 0).unwrap();
                v.set(c(3, y, z), 0).unwrap();
                v.set(c(4, y, z), 7).unwrap();
            }
        }
        let seg = segment_components(&v, &CellValues::default());
        assert_eq!(seg.component_count(), 2);
        assert_eq!(seg.label_map().get(c(0, 1, 1)), Some(ComponentLabel(1)));
        assert_eq!(seg.label_map().get(c(4, 0, 0)), Some(ComponentLabel(2)));
        assert_eq!(seg.component_sizes(), &[4, 8]);
        assert_eq!(seg.sample_count(ComponentLabel(1)), 0);
        assert_eq!(seg.sample_count(ComponentLabel(2)), 4);
    }

    #[test]
    fn sub_volumes_mask_other_components() {
        let mut v = fluid_volume(3, 1, 1);
        v.set(c(0, 0, 0), 0).unwrap();
        v.set(c(2, 0, 0), 9).unwrap();
        let seg = segment_components(&v, &CellValues::default());
        let first = seg.sub_volume(ComponentLabel(1)).unwrap();
        let second = seg.sub_volume(ComponentLabel(2)).unwrap();
        assert_eq!(first.as_bytes(), &[0, 1, 1]);
        assert_eq!(second.as_bytes(), &[1, 1, 9]);
        assert!(seg.sub_volume(ComponentLabel(3)).is_none());
        assert!(seg.sub_volume(ComponentLabel(0)).is_none());
    }

    #[test]
    fn custom_fluid_value() {
        let mut v = Volume::filled(Dims::new(2, 1, 1), 255).unwrap();
        v.set(c(1, 0, 0), 1).unwrap();
        let seg = segment_components(&v, &CellValues::with_fluid(255));
        assert_eq!(seg.component_count(), 1);
        // 1 is neither fluid (255) nor solid (0): a sample.
        assert_eq!(seg.sample_count(ComponentLabel(1)), 1);
        assert_eq!(seg.sub_volumes()[0].as_bytes(), &[255, 1]);
    }

    #[test]
    fn iter_and_into_parts_agree() {
        let mut v = fluid_volume(3, 1, 1);
        v.set(c(0, 0, 0), 0).unwrap();
        v.set(c(2, 0, 0), 0).unwrap();
        let seg = segment_components(&v, &CellValues::default());
        let labels: Vec<_> = seg.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec![ComponentLabel(1), ComponentLabel(2)]);
        let (subs, map) = seg.into_parts();
        assert_eq!(subs.len(), 2);
        assert_eq!(map.component_count(), 2);
    }
}
