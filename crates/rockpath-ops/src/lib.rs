//! Volume transformations for Rockpath.
//!
//! Whole-grid passes that run before any path search, plus the seam where
//! external interpolators plug in.
//!
//! # Pipeline order
//!
//! 1. [`ComponentSegmenter`]: volume → label map + one sub-volume per component
//! 2. [`SurfaceReduction`] (optional): sub-volume → sub-volume without interior solid
//! 3. [`interpolate_components`] / [`interpolate_surface_components`]:
//!    sparse samples → dense estimates merged onto solid cells only
//!
//! Sample cells (any value other than the fluid and solid markers) survive
//! every stage unchanged.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod interpolate;
pub mod segmentation;
pub mod surface;

pub use error::InterpolationError;
pub use interpolate::{
    collect_samples, interpolate_components, interpolate_surface_components, interpolate_volume,
    restrict_to_solid, Interpolator, Sample,
};
pub use segmentation::{segment_components, ComponentSegmenter, Segmentation};
pub use surface::{remove_internal_solid, Reduced, SurfaceReduction, SurfaceReductionBuilder};
