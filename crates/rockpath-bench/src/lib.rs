//! Benchmark profiles for the Rockpath voxel connectivity engine.
//!
//! Provides pre-built volumes and planner configurations shared by the
//! criterion benches:
//!
//! - [`reference_volume`]: 32×32×32 porous rock (~32K cells)
//! - [`stress_volume`]: 64×64×64 porous rock (~262K cells)
//! - [`reference_config`]: default planner with a fixed worker count

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rockpath_core::{Dims, Volume};
use rockpath_engine::PlannerConfig;
use rockpath_test_utils::fixtures::random_volume;

/// Percentage of cells that are rock in the benchmark volumes.
pub const SOLID_PCT: u32 = 55;

/// Percentage of rock cells carrying a sample in the benchmark volumes.
pub const SAMPLE_PCT: u32 = 1;

/// Reference porous volume: 32×32×32.
pub fn reference_volume(seed: u64) -> Volume {
    random_volume(Dims::new(32, 32, 32), seed, SOLID_PCT, SAMPLE_PCT)
}

/// Stress porous volume: 64×64×64, 8× the reference cell count.
pub fn stress_volume(seed: u64) -> Volume {
    random_volume(Dims::new(64, 64, 64), seed, SOLID_PCT, SAMPLE_PCT)
}

/// Planner configuration used by the profile benches.
///
/// Pins the worker count so timings are comparable across machines with
/// different core counts.
pub fn reference_config(reduce_surface: bool) -> PlannerConfig {
    PlannerConfig {
        reduce_surface,
        worker_count: Some(4),
        ..PlannerConfig::default()
    }
}
