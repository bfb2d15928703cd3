//! Per-source distance and predecessor grids.

use crate::error::SearchError;
use crate::path::{path_from_parents, Path};
use rockpath_core::{Coord3, Dims};
use rockpath_space::Connectivity;

/// Predecessor state of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parent {
    /// Never reached from the source.
    Unvisited,
    /// The search origin.
    Source,
    /// Reached by stepping from this neighbour.
    Via(Coord3),
}

/// Result of one single-source search: the cheapest known cost to every
/// cell and the predecessor on that cheapest path.
///
/// Both grids are co-indexed with the searched volume. Unreached cells
/// carry an infinite distance and [`Parent::Unvisited`].
#[derive(Clone, Debug)]
pub struct ParentalField {
    dims: Dims,
    source: Coord3,
    connectivity: Connectivity,
    distances: Vec<f64>,
    parents: Vec<Parent>,
}

impl ParentalField {
    pub(crate) fn new(
        dims: Dims,
        source: Coord3,
        connectivity: Connectivity,
        distances: Vec<f64>,
        parents: Vec<Parent>,
    ) -> Self {
        Self {
            dims,
            source,
            connectivity,
            distances,
            parents,
        }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Search origin.
    pub fn source(&self) -> Coord3 {
        self.source
    }

    /// Neighbour rule the search ran under.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Cheapest cost from the source to `coord`; `None` if out of bounds
    /// or unreachable.
    pub fn distance(&self, coord: Coord3) -> Option<f64> {
        if !self.dims.contains(coord) {
            return None;
        }
        let d = self.distances[self.dims.index_of(coord)];
        d.is_finite().then_some(d)
    }

    /// Predecessor of `coord`; `None` if out of bounds.
    pub fn parent(&self, coord: Coord3) -> Option<Parent> {
        self.dims
            .contains(coord)
            .then(|| self.parents[self.dims.index_of(coord)])
    }

    /// `true` if `coord` is in bounds and reached by the search.
    pub fn is_reachable(&self, coord: Coord3) -> bool {
        !matches!(self.parent(coord), None | Some(Parent::Unvisited))
    }

    /// Number of cells reached, including the source.
    pub fn reachable_count(&self) -> usize {
        self.parents
            .iter()
            .filter(|p| !matches!(p, Parent::Unvisited))
            .count()
    }

    /// Raw distance grid in canonical order (`f64::INFINITY` = unreached).
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Raw parent grid in canonical order.
    pub fn parents(&self) -> &[Parent] {
        &self.parents
    }

    /// Reconstruct the path from the source to `target`.
    pub fn path_to(&self, target: Coord3) -> Result<Path, SearchError> {
        path_from_parents(self, target)
    }
}
