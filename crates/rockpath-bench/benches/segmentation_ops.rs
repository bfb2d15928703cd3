//! Criterion micro-benchmarks for segmentation and surface reduction.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rockpath_bench::{reference_volume, stress_volume};
use rockpath_core::CellValues;
use rockpath_ops::{ComponentSegmenter, SurfaceReduction};
use rockpath_space::Connectivity;

/// Benchmark: label the 32K-cell reference volume under each connectivity.
fn bench_label_32k(c: &mut Criterion) {
    let volume = reference_volume(42);
    for connectivity in [Connectivity::Face6, Connectivity::Edge18, Connectivity::Vertex26] {
        let segmenter =
            ComponentSegmenter::new(CellValues::default()).with_connectivity(connectivity);
        c.bench_function(&format!("label_32k_c{}", connectivity.level()), |b| {
            b.iter(|| black_box(segmenter.label(&volume)));
        });
    }
}

/// Benchmark: full segmentation (labels + sub-volumes) of the 262K-cell volume.
fn bench_segment_262k(c: &mut Criterion) {
    let volume = stress_volume(42);
    let segmenter = ComponentSegmenter::new(CellValues::default());
    c.bench_function("segment_262k", |b| {
        b.iter(|| black_box(segmenter.segment(&volume)));
    });
}

/// Benchmark: one surface reduction pass over the reference volume.
fn bench_reduce_32k(c: &mut Criterion) {
    let volume = reference_volume(42);
    let reduction = SurfaceReduction::builder().build().unwrap();
    c.bench_function("reduce_32k", |b| {
        b.iter(|| black_box(reduction.apply(&volume)));
    });
}

criterion_group!(benches, bench_label_32k, bench_segment_262k, bench_reduce_32k);
criterion_main!(benches);
