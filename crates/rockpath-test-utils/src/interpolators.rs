//! Mock estimators for the interpolation seam.
//!
//! - [`ConstantInterpolator`]: fills the grid with one value.
//! - [`MeanInterpolator`]: fills the grid with the sample mean.
//! - [`NearestSampleInterpolator`]: copies the closest sample's value.
//! - [`FailingInterpolator`]: always errors.

use rockpath_core::{Coord3, Dims};
use rockpath_ops::{InterpolationError, Interpolator, Sample};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Writes the same value everywhere.
pub struct ConstantInterpolator {
    pub value: f64,
}

impl Interpolator for ConstantInterpolator {
    fn name(&self) -> &str {
        "constant"
    }

    fn estimate(&self, dims: Dims, _: &[Sample]) -> Result<Vec<f64>, InterpolationError> {
        Ok(vec![self.value; dims.cell_count()])
    }
}

/// Writes the mean of all sample values everywhere.
///
/// Counts its calls so tests can check how many components were
/// interpolated.
#[derive(Default)]
pub struct MeanInterpolator {
    calls: AtomicUsize,
}

impl MeanInterpolator {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `estimate()` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Interpolator for MeanInterpolator {
    fn name(&self) -> &str {
        "mean"
    }

    fn estimate(&self, dims: Dims, samples: &[Sample]) -> Result<Vec<f64>, InterpolationError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let sum: f64 = samples.iter().map(|s| f64::from(s.value)).sum();
        Ok(vec![sum / samples.len() as f64; dims.cell_count()])
    }
}

/// Nearest-neighbour estimate by squared Euclidean distance. Ties go to
/// the sample listed first.
pub struct NearestSampleInterpolator;

fn dist2(a: Coord3, b: Coord3) -> usize {
    let d = |p: usize, q: usize| p.abs_diff(q).pow(2);
    d(a.x, b.x) + d(a.y, b.y) + d(a.z, b.z)
}

impl Interpolator for NearestSampleInterpolator {
    fn name(&self) -> &str {
        "nearest"
    }

    fn estimate(&self, dims: Dims, samples: &[Sample]) -> Result<Vec<f64>, InterpolationError> {
        dims.coords()
            .map(|cell| {
                samples
                    .iter()
                    .min_by_key(|s| dist2(s.coord, cell))
                    .map(|s| f64::from(s.value))
                    .ok_or(InterpolationError::EmptyInput)
            })
            .collect()
    }
}

/// Always fails with an `Estimator` error.
pub struct FailingInterpolator;

impl Interpolator for FailingInterpolator {
    fn name(&self) -> &str {
        "failing"
    }

    fn estimate(&self, _: Dims, _: &[Sample]) -> Result<Vec<f64>, InterpolationError> {
        Err(InterpolationError::Estimator {
            name: self.name().to_string(),
            reason: "deliberate failure".to_string(),
        })
    }
}
