//! Grid-native Dijkstra search.
//!
//! Fluid cells are impassable; every other cell (solid or sample) can be
//! stepped through. Step costs are Euclidean offset norms, so distances
//! are geometric lengths rather than hop counts.
//!
//! The frontier is a binary heap with lazy deletion: improved cells are
//! pushed again and stale entries are skipped on pop. Ties on distance
//! pop the lower flat index first and a cell keeps the first predecessor
//! that reached it at its final cost, so results are deterministic.
//!
//! Each call allocates its own distance and parent grids and shares no
//! state with other calls.

use crate::error::SearchError;
use crate::field::{Parent, ParentalField};
use crate::queue::OrdF64;
use rockpath_core::{CellValues, Coord3, Volume};
use rockpath_space::{Connectivity, Lattice3};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Single-source shortest-path search over a voxel volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dijkstra3D {
    connectivity: Connectivity,
    values: CellValues,
}

impl Dijkstra3D {
    /// Search with the given neighbour rule and cell values.
    pub fn new(connectivity: Connectivity, values: CellValues) -> Self {
        Self {
            connectivity,
            values,
        }
    }

    /// Neighbour rule.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Reserved cell values.
    pub fn values(&self) -> CellValues {
        self.values
    }

    /// Run a full search from `source`.
    ///
    /// The source itself may hold any value: it is the query origin and
    /// is never stepped through from elsewhere.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `source` lies outside `volume`. No queue work is
    /// done in that case.
    pub fn parental_field(
        &self,
        volume: &Volume,
        source: Coord3,
    ) -> Result<ParentalField, SearchError> {
        let lattice = Lattice3::of_volume(volume, self.connectivity);
        let dims = volume.dims();
        let start = lattice
            .check_bounds(source)
            .map_err(|_| SearchError::OutOfBounds {
                coord: source,
                dims,
            })?;

        let mut distances = vec![f64::INFINITY; volume.cell_count()];
        let mut parents = vec![Parent::Unvisited; volume.cell_count()];
        distances[start] = 0.0;
        parents[start] = Parent::Source;

        let mut heap = BinaryHeap::new();
        heap.push(Reverse((OrdF64(0.0), start)));

        while let Some(Reverse((OrdF64(d), index))) = heap.pop() {
            if d > distances[index] {
                continue;
            }
            let coord = dims.coord_of(index);
            for (nb, cost) in lattice.neighbours(coord) {
                let nb_index = dims.index_of(nb);
                if !self.values.is_occupied(volume.at(nb_index)) {
                    continue;
                }
                let candidate = d + cost;
                if candidate < distances[nb_index] {
                    distances[nb_index] = candidate;
                    parents[nb_index] = Parent::Via(coord);
                    heap.push(Reverse((OrdF64(candidate), nb_index)));
                }
            }
        }

        Ok(ParentalField::new(
            dims,
            source,
            self.connectivity,
            distances,
            parents,
        ))
    }
}

/// Run one search with explicit parameters.
pub fn parental_field(
    volume: &Volume,
    source: Coord3,
    connectivity: Connectivity,
    values: &CellValues,
) -> Result<ParentalField, SearchError> {
    Dijkstra3D::new(connectivity, *values).parental_field(volume, source)
}
