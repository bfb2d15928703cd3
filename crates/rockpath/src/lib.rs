//! Rockpath: a voxel connectivity engine for digital rock analysis.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Rockpath sub-crates. For most users, adding `rockpath` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rockpath::prelude::*;
//!
//! // A 5×5×5 fluid volume (1) holding a 3×3×3 rock block (0) with one
//! // sample cell (42) on its corner.
//! let mut volume = Volume::filled(Dims::new(5, 5, 5), 1).unwrap();
//! for x in 1..4 {
//!     for y in 1..4 {
//!         for z in 1..4 {
//!             volume.set(Coord3::new(x, y, z), 0).unwrap();
//!         }
//!     }
//! }
//! volume.set(Coord3::new(1, 1, 1), 42).unwrap();
//!
//! let planner = PathPlanner::new(PlannerConfig::default()).unwrap();
//! let out = planner.plan(&volume).unwrap();
//! assert_eq!(out.metrics.component_count, 1);
//!
//! let paths = out.path_set(ComponentLabel(1)).unwrap();
//! let path = paths
//!     .path_between(Coord3::new(1, 1, 1), Coord3::new(3, 3, 3))
//!     .unwrap();
//! assert_eq!(path.steps(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rockpath-core` | Volumes, coordinates, cell classes, label maps |
//! | [`space`] | `rockpath-space` | Connectivity levels and the bounded 3-D lattice |
//! | [`ops`] | `rockpath-ops` | Segmentation, surface reduction, interpolation seam |
//! | [`path`] | `rockpath-path` | Dijkstra search, parental fields, path reconstruction |
//! | [`engine`] | `rockpath-engine` | Planner configuration, worker pool, path sets |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Volumes, coordinates, and cell semantics (`rockpath-core`).
///
/// [`types::CellValues`] decides which byte values are fluid, solid, or
/// samples for every other stage.
pub use rockpath_core as types;

/// Neighbour topology (`rockpath-space`).
///
/// [`space::Connectivity`] picks the 6, 18, or 26 neighbourhood;
/// [`space::Lattice3`] applies it to a bounded grid.
pub use rockpath_space as space;

/// Whole-volume transformations (`rockpath-ops`).
///
/// [`ops::ComponentSegmenter`], [`ops::SurfaceReduction`], and the
/// [`ops::Interpolator`] seam for external estimators.
pub use rockpath_ops as ops;

/// Shortest paths through rock (`rockpath-path`).
pub use rockpath_path as path;

/// Path planning across components (`rockpath-engine`).
///
/// [`engine::PathPlanner`] runs the whole pipeline and returns one
/// [`engine::PathSet`] per component.
pub use rockpath_engine as engine;

/// Common imports for typical Rockpath usage.
///
/// ```rust
/// use rockpath::prelude::*;
/// ```
pub mod prelude {
    // Volumes and cells
    pub use rockpath_core::{
        CellClass, CellValues, ComponentLabel, Coord3, Dims, LabelMap, Volume, VolumeCensus,
    };

    // Topology
    pub use rockpath_space::Connectivity;

    // Transformations
    pub use rockpath_ops::{ComponentSegmenter, Interpolator, Segmentation, SurfaceReduction};

    // Search
    pub use rockpath_path::{Dijkstra3D, ParentalField, Path};

    // Errors
    pub use rockpath_core::VolumeError;
    pub use rockpath_engine::{ConfigError, PlanError};
    pub use rockpath_ops::InterpolationError;
    pub use rockpath_path::SearchError;
    pub use rockpath_space::SpaceError;

    // Engine
    pub use rockpath_engine::{
        CancelToken, PathPlanner, PathSet, PlanMetrics, PlanOutput, PlannerConfig,
    };
}
