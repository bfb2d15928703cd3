//! Test utilities and mock collaborators for Rockpath development.
//!
//! Provides a [`VolumeBuilder`] for hand-built grids, canonical
//! fixtures shared across crates, seeded random volumes, and mock
//! [`Interpolator`](rockpath_ops::Interpolator) implementations standing in
//! for the external statistical estimators.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod interpolators;

use rockpath_core::{Coord3, Dims, Volume};

/// Fluent construction of small test volumes.
///
/// Panics on empty dimensions or out-of-bounds writes: fixtures are
/// expected to be well-formed.
pub struct VolumeBuilder {
    volume: Volume,
}

impl VolumeBuilder {
    /// Start from a grid filled with `fill`.
    pub fn new(dims: Dims, fill: u8) -> Self {
        let volume = Volume::filled(dims, fill).expect("test volume dims must be non-zero");
        Self { volume }
    }

    /// Start from an all-fluid grid (value 1).
    pub fn fluid(x: usize, y: usize, z: usize) -> Self {
        Self::new(Dims::new(x, y, z), 1)
    }

    /// Set every cell in the inclusive box `min..=max`.
    pub fn block(mut self, min: [usize; 3], max: [usize; 3], value: u8) -> Self {
        for x in min[0]..=max[0] {
            for y in min[1]..=max[1] {
                for z in min[2]..=max[2] {
                    self = self.cell([x, y, z], value);
                }
            }
        }
        self
    }

    /// Set one cell.
    pub fn cell(mut self, at: [usize; 3], value: u8) -> Self {
        self.volume
            .set(Coord3::from(at), value)
            .expect("fixture cell out of bounds");
        self
    }

    pub fn build(self) -> Volume {
        self.volume
    }
}
