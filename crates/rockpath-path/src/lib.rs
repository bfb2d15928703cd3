//! Shortest paths across solid voxels.
//!
//! [`Dijkstra3D`] runs one single-source search over a volume and returns
//! a [`ParentalField`]: the cheapest cost to every reachable cell plus the
//! predecessor on that path. [`path_from_parents`] walks the predecessors
//! back to the source to rebuild a [`Path`].
//!
//! Fluid cells are impassable. Solid and sample cells can be traversed.
//! Step costs come from [`rockpath_space::Connectivity`]: 1, √2, or √3.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dijkstra;
pub mod error;
pub mod field;
pub mod path;
mod queue;

pub use dijkstra::{parental_field, Dijkstra3D};
pub use error::SearchError;
pub use field::{Parent, ParentalField};
pub use path::{path_from_parents, Path};
