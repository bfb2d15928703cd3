//! Voxel lattice topology for Rockpath.
//!
//! This crate defines which voxels count as neighbours and what a single
//! step between them costs. Every stage that walks the grid (segmentation,
//! surface reduction, shortest-path search) goes through [`Lattice3`].
//!
//! # Connectivity
//!
//! - [`Connectivity::Face6`]: shared faces only (cost 1)
//! - [`Connectivity::Edge18`]: faces plus shared edges (cost √2)
//! - [`Connectivity::Vertex26`]: faces, edges, and shared corners (cost √3)
//!
//! Boundary voxels simply have fewer neighbours. There is no wraparound.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connectivity;
pub mod error;
pub mod lattice;

#[cfg(test)]
pub(crate) mod compliance;

pub use connectivity::{Connectivity, Offset};
pub use error::SpaceError;
pub use lattice::{Lattice3, Neighbours};
