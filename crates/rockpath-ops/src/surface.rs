//! Surface reduction: flatten fully enclosed solid to fluid.
//!
//! A non-fluid cell is *internal* when none of its neighbours is fluid and
//! none of its neighbour positions falls outside the grid. Internal cells
//! are rewritten to the fluid value in a single pass classified against the
//! original grid; a second pass then restores every sample cell, so
//! measurements survive even when geometrically buried.
//!
//! The neighbour rule defaults to 6-connectivity. Path planning defaults to
//! 26, so the two stages disagree on what "touching" means unless
//! configured otherwise.
//!
//! Constructed via the builder pattern: [`SurfaceReduction::builder`].

use rockpath_core::{CellValues, Volume};
use rockpath_space::{Connectivity, Lattice3};
use tracing::debug;

/// Removes interior solid, keeping the reachable surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceReduction {
    values: CellValues,
    connectivity: Connectivity,
}

/// Builder for [`SurfaceReduction`].
pub struct SurfaceReductionBuilder {
    values: CellValues,
    connectivity: Connectivity,
}

/// Output of one reduction pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduced {
    /// The reduced volume.
    pub volume: Volume,
    /// Number of cells rewritten to fluid.
    pub demoted: usize,
}

impl SurfaceReduction {
    /// Create a new builder with default cell values and 6-connectivity.
    pub fn builder() -> SurfaceReductionBuilder {
        SurfaceReductionBuilder {
            values: CellValues::default(),
            connectivity: Connectivity::Face6,
        }
    }

    /// Reserved cell values.
    pub fn values(&self) -> CellValues {
        self.values
    }

    /// Neighbour rule used to decide "touches fluid or boundary".
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// `true` if the cell at flat `index` of `volume` is internal.
    pub fn is_internal(&self, volume: &Volume, index: usize) -> bool {
        let lattice = Lattice3::of_volume(volume, self.connectivity);
        self.internal_in(&lattice, volume, index)
    }

    fn internal_in(&self, lattice: &Lattice3, volume: &Volume, index: usize) -> bool {
        if !self.values.is_occupied(volume.at(index)) {
            return false;
        }
        let dims = volume.dims();
        let coord = dims.coord_of(index);
        if lattice.touches_boundary(coord) {
            return false;
        }
        lattice
            .neighbours(coord)
            .iter()
            .all(|&(nb, _)| self.values.is_occupied(volume.at(dims.index_of(nb))))
    }

    /// Reduce `volume`, reporting how many cells were demoted.
    pub fn apply(&self, volume: &Volume) -> Reduced {
        let lattice = Lattice3::of_volume(volume, self.connectivity);
        let mut out = volume.clone();

        // Pass 1: classify against the original grid.
        {
            let cells = out.as_bytes_mut();
            for (index, cell) in cells.iter_mut().enumerate() {
                if self.internal_in(&lattice, volume, index) {
                    *cell = self.values.fluid;
                }
            }
        }

        // Pass 2: samples override.
        let original = volume.as_bytes();
        let mut demoted = 0;
        for (index, cell) in out.as_bytes_mut().iter_mut().enumerate() {
            if self.values.is_sample(original[index]) {
                *cell = original[index];
            } else if *cell != original[index] {
                demoted += 1;
            }
        }

        debug!(
            demoted,
            dims = %volume.dims(),
            connectivity = self.connectivity.level(),
            "surface reduction"
        );

        Reduced {
            volume: out,
            demoted,
        }
    }

    /// Reduce `volume`, returning only the reduced grid.
    pub fn reduce(&self, volume: &Volume) -> Volume {
        self.apply(volume).volume
    }
}

impl SurfaceReductionBuilder {
    /// Set the reserved cell values.
    pub fn values(mut self, values: CellValues) -> Self {
        self.values = values;
        self
    }

    /// Set the neighbour rule (default: 6-connectivity).
    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Build the reducer, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the fluid and solid values are equal, which would
    /// make every solid cell indistinguishable from pore space.
    pub fn build(self) -> Result<SurfaceReduction, String> {
        if self.values.fluid == self.values.solid {
            return Err(format!(
                "fluid and solid values must differ (both {})",
                self.values.fluid
            ));
        }
        Ok(SurfaceReduction {
            values: self.values,
            connectivity: self.connectivity,
        })
    }
}

/// Reduce with default settings: 6-connectivity.
pub fn remove_internal_solid(volume: &Volume, values: &CellValues) -> Volume {
    SurfaceReduction {
        values: *values,
        connectivity: Connectivity::Face6,
    }
    .reduce(volume)
}
