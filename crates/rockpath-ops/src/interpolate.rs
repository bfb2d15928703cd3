//! Interpolation seam and final-domain merge.
//!
//! Statistical estimators (kriging, nearest-neighbour regression) live
//! outside this crate and plug in through [`Interpolator`]: given sparse
//! samples, produce a dense estimate over the whole grid. This module
//! decides *where* those estimates may land.
//!
//! # Final-domain merge
//!
//! Estimates only replace solid-default cells. Fluid cells are left
//! untouched and sample cells keep their measured value. Estimates are
//! converted with a saturating cast to `u8` (fractions truncate, negatives
//! clamp to 0, values above 255 clamp to 255, NaN becomes 0). An estimate
//! that lands on the fluid marker is written as the solid marker instead,
//! so merged rock never turns into pore space.

use crate::error::InterpolationError;
use crate::segmentation::{ComponentSegmenter, Segmentation};
use crate::surface::SurfaceReduction;
use rockpath_core::{CellClass, CellValues, Coord3, Dims, Volume, VolumeError};
use tracing::debug;

/// One measured cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    /// Location of the measurement.
    pub coord: Coord3,
    /// Measured value.
    pub value: u8,
}

/// A dense estimator over sparse samples.
///
/// Implementations that try several models (e.g. competing variograms)
/// should keep the first model that improves on the running best and
/// only log later attempts that tie or do worse.
pub trait Interpolator {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    /// Estimate a value for every cell of a `dims` grid, in canonical
    /// (row-major) order. `samples` is never empty.
    fn estimate(&self, dims: Dims, samples: &[Sample]) -> Result<Vec<f64>, InterpolationError>;
}

/// Every sample cell of `volume`, in canonical order.
pub fn collect_samples(volume: &Volume, values: &CellValues) -> Vec<Sample> {
    let dims = volume.dims();
    volume
        .as_bytes()
        .iter()
        .enumerate()
        .filter(|&(_, &v)| values.is_sample(v))
        .map(|(i, &value)| Sample {
            coord: dims.coord_of(i),
            value,
        })
        .collect()
}

/// Merge a dense estimate into `original`, touching only solid-default
/// cells.
///
/// Estimates that cast to the fluid marker keep the solid marker, so the
/// occupied mask of the result matches `original`.
///
/// Returns `EstimateShape` if `estimate` does not hold one value per cell.
pub fn restrict_to_solid(
    original: &Volume,
    estimate: &[f64],
    values: &CellValues,
) -> Result<Volume, InterpolationError> {
    if estimate.len() != original.cell_count() {
        return Err(InterpolationError::EstimateShape {
            expected: original.cell_count(),
            got: estimate.len(),
        });
    }
    let mut out = original.clone();
    for (cell, &e) in out.as_bytes_mut().iter_mut().zip(estimate) {
        if values.classify(*cell) == CellClass::Solid {
            let estimate = e as u8;
            *cell = if estimate == values.fluid {
                values.solid
            } else {
                estimate
            };
        }
    }
    Ok(out)
}

/// Interpolate across every solid cell of `volume` at once.
///
/// # Errors
///
/// `EmptyInput` if `volume` holds no sample cells; otherwise whatever the
/// estimator reports.
pub fn interpolate_volume(
    volume: &Volume,
    values: &CellValues,
    interpolator: &dyn Interpolator,
) -> Result<Volume, InterpolationError> {
    let samples = collect_samples(volume, values);
    if samples.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    debug!(
        estimator = interpolator.name(),
        samples = samples.len(),
        dims = %volume.dims(),
        "interpolating volume"
    );
    let estimate = interpolator.estimate(volume.dims(), &samples)?;
    restrict_to_solid(volume, &estimate, values)
}

/// Interpolate each component of `segmentation` independently.
///
/// Components without samples are left as they are. Each component's
/// result is written back only where the label map carries its label.
pub fn interpolate_components(
    volume: &Volume,
    segmentation: &Segmentation,
    values: &CellValues,
    interpolator: &dyn Interpolator,
) -> Result<Volume, InterpolationError> {
    let label_map = segmentation.label_map();
    if label_map.dims() != volume.dims() {
        return Err(VolumeError::DimsMismatch {
            expected: volume.dims(),
            got: label_map.dims(),
        }
        .into());
    }

    let mut out = volume.clone();
    for (label, sub_volume) in segmentation.iter() {
        if segmentation.sample_count(label) == 0 {
            debug!(%label, "component has no samples, kept unchanged");
            continue;
        }
        let filled = interpolate_volume(sub_volume, values, interpolator)?;
        let filled = filled.as_bytes();
        for (index, cell) in out.as_bytes_mut().iter_mut().enumerate() {
            if label_map.is_labelled(index, label) {
                *cell = filled[index];
            }
        }
    }
    Ok(out)
}

/// Remove interior solid, then interpolate each remaining component.
pub fn interpolate_surface_components(
    volume: &Volume,
    reduction: &SurfaceReduction,
    interpolator: &dyn Interpolator,
) -> Result<Volume, InterpolationError> {
    let values = reduction.values();
    let surface = reduction.reduce(volume);
    let segmentation = ComponentSegmenter::new(values).segment(&surface);
    interpolate_components(&surface, &segmentation, &values, interpolator)
}
