//! Core types for the Rockpath voxel connectivity engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared by every stage of the pipeline:
//! voxel coordinates, grid dimensions, dense volumes, cell semantics,
//! component labels, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod label;
pub mod volume;

pub use cell::{CellClass, CellValues, VolumeCensus};
pub use error::VolumeError;
pub use id::{ComponentLabel, Coord3};
pub use label::LabelMap;
pub use volume::{Dims, Volume};
