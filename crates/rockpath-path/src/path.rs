//! Path reconstruction by walking predecessors.

use crate::error::SearchError;
use crate::field::{Parent, ParentalField};
use rockpath_core::Coord3;

/// An ordered run of voxels from a source to a target, both inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    cells: Vec<Coord3>,
    cost: f64,
}

impl Path {
    /// First cell (the search origin).
    pub fn source(&self) -> Coord3 {
        self.cells[0]
    }

    /// Last cell.
    pub fn target(&self) -> Coord3 {
        self.cells[self.cells.len() - 1]
    }

    /// Cells in traversal order, source first.
    pub fn cells(&self) -> &[Coord3] {
        &self.cells
    }

    /// Number of cells, counting both ends. Always at least 1.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a path holds at least its source.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of steps taken (`len() - 1`).
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    /// Summed Euclidean step cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Consume the path, returning its cells.
    pub fn into_cells(self) -> Vec<Coord3> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord3;
    type IntoIter = std::slice::Iter<'a, Coord3>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Walk back from `target` to the source of `field`.
///
/// # Errors
///
/// `OutOfBounds` if `target` lies outside the grid; `Unreachable` if the
/// search never reached it.
pub fn path_from_parents(field: &ParentalField, target: Coord3) -> Result<Path, SearchError> {
    let dims = field.dims();
    if !dims.contains(target) {
        return Err(SearchError::OutOfBounds {
            coord: target,
            dims,
        });
    }
    let unreachable = SearchError::Unreachable {
        source: field.source(),
        target,
    };

    let parents = field.parents();
    let mut cells = Vec::new();
    let mut current = target;
    loop {
        cells.push(current);
        match parents[dims.index_of(current)] {
            Parent::Source => break,
            Parent::Via(prev) => current = prev,
            Parent::Unvisited => return Err(unreachable),
        }
    }
    cells.reverse();

    let cost = field.distance(target).ok_or(unreachable)?;
    Ok(Path { cells, cost })
}
