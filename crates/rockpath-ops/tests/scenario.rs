//! End-to-end checks on the canonical fixtures.

use rockpath_core::{CellValues, ComponentLabel, Coord3};
use rockpath_ops::{
    interpolate_components, interpolate_surface_components, interpolate_volume,
    segment_components, InterpolationError, SurfaceReduction,
};
use rockpath_test_utils::fixtures::{
    centered_block_with_sample, parallel_slabs, BLOCK_CENTRE, BLOCK_OPPOSITE, BLOCK_SAMPLE,
    SAMPLE_VALUE,
};
use rockpath_test_utils::interpolators::{
    ConstantInterpolator, FailingInterpolator, MeanInterpolator, NearestSampleInterpolator,
};

// ── Centred block ───────────────────────────────────────────────

#[test]
fn block_is_one_component_of_27() {
    let seg = segment_components(&centered_block_with_sample(), &CellValues::default());
    assert_eq!(seg.component_count(), 1);
    assert_eq!(seg.component_sizes(), &[27]);
    assert_eq!(seg.sample_count(ComponentLabel(1)), 1);
}

#[test]
fn reduction_demotes_only_the_centre() {
    let values = CellValues::default();
    let volume = centered_block_with_sample();
    let r = SurfaceReduction::builder().build().unwrap().apply(&volume);
    assert_eq!(r.demoted, 1);
    assert_eq!(r.volume.get(BLOCK_CENTRE), Some(values.fluid));
    assert_eq!(r.volume.get(BLOCK_SAMPLE), Some(SAMPLE_VALUE));
    assert_eq!(r.volume.get(BLOCK_OPPOSITE), Some(values.solid));

    let seg = segment_components(&r.volume, &values);
    assert_eq!(seg.component_sizes(), &[26]);
}

#[test]
fn nearest_interpolation_fills_block() {
    let values = CellValues::default();
    let volume = centered_block_with_sample();
    let out = interpolate_volume(&volume, &values, &NearestSampleInterpolator).unwrap();
    let census = out.census(&values);
    assert_eq!(census.solid, 0);
    assert_eq!(census.sample, 27);
    assert_eq!(census.fluid, 98);
    assert_eq!(out.get(Coord3::new(0, 0, 0)), Some(values.fluid));
}

#[test]
fn fluid_valued_estimates_keep_block_occupied() {
    let values = CellValues::default();
    let volume = centered_block_with_sample();
    let out = interpolate_volume(&volume, &values, &ConstantInterpolator { value: 1.0 }).unwrap();
    assert_eq!(out, volume);
    let seg = segment_components(&out, &values);
    assert_eq!(seg.component_sizes(), &[27]);
}

// ── Parallel slabs ──────────────────────────────────────────────

#[test]
fn slabs_split_into_two_components() {
    let seg = segment_components(&parallel_slabs(20), &CellValues::default());
    assert_eq!(seg.component_count(), 2);
    assert_eq!(seg.component_sizes(), &[4 * 400, 2 * 400]);
    assert_eq!(seg.sample_count(ComponentLabel(1)), 2);
    assert_eq!(seg.sample_count(ComponentLabel(2)), 0);
}

#[test]
fn per_component_interpolation_skips_sampleless_wall() {
    let values = CellValues::default();
    let volume = parallel_slabs(20);
    let seg = segment_components(&volume, &values);
    let mean = MeanInterpolator::new();
    let out = interpolate_components(&volume, &seg, &values, &mean).unwrap();
    assert_eq!(mean.calls(), 1);
    // Mean of 10 and 5, truncated.
    assert_eq!(out.get(Coord3::new(2, 10, 10)), Some(7));
    assert_eq!(out.get(Coord3::new(0, 0, 0)), Some(10));
    assert_eq!(out.get(Coord3::new(19, 10, 10)), Some(values.solid));
    assert_eq!(out.get(Coord3::new(10, 10, 10)), Some(values.fluid));
}

#[test]
fn surface_interpolation_leaves_interior_fluid() {
    let values = CellValues::default();
    let volume = parallel_slabs(20);
    let reduction = SurfaceReduction::builder().build().unwrap();
    let out =
        interpolate_surface_components(&volume, &reduction, &ConstantInterpolator { value: 9.0 })
            .unwrap();
    // Interior of the low wall is gone; its fluid-facing side is filled.
    assert_eq!(out.get(Coord3::new(1, 10, 10)), Some(values.fluid));
    assert_eq!(out.get(Coord3::new(3, 10, 10)), Some(9));
    assert_eq!(out.get(Coord3::new(0, 10, 10)), Some(9));
    assert_eq!(out.get(Coord3::new(0, 0, 0)), Some(10));
}

#[test]
fn estimator_failure_propagates() {
    let values = CellValues::default();
    let volume = parallel_slabs(10);
    let seg = segment_components(&volume, &values);
    let err = interpolate_components(&volume, &seg, &values, &FailingInterpolator).unwrap_err();
    assert_eq!(
        err,
        InterpolationError::Estimator {
            name: "failing".to_string(),
            reason: "deliberate failure".to_string(),
        }
    );
}
