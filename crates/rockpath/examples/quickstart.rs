//! Rockpath Quickstart: plan surface paths through a small rock sample.
//!
//! Demonstrates:
//!   1. Building a volume with fluid, rock, and sample cells
//!   2. Reading the cell census before and after surface reduction
//!   3. Planning paths from every sample with a `PathPlanner`
//!   4. Looking up individual paths and the run metrics
//!
//! Run with:
//!   cargo run --example quickstart

use rockpath::prelude::*;

// ─── Volume parameters ──────────────────────────────────────────

const SIDE: usize = 9;
const FLUID: u8 = 1;
const ROCK: u8 = 0;

// Two grains with a contact-angle sample on each, plus one sample-free grain.
const GRAIN_A: ([usize; 3], [usize; 3]) = ([1, 1, 1], [3, 4, 3]);
const GRAIN_B: ([usize; 3], [usize; 3]) = ([5, 4, 5], [7, 7, 7]);
const GRAIN_C: ([usize; 3], [usize; 3]) = ([6, 0, 0], [7, 1, 1]);
const SAMPLE_A: Coord3 = Coord3::new(1, 1, 1);
const SAMPLE_B: Coord3 = Coord3::new(7, 7, 7);

fn fill_block(volume: &mut Volume, (min, max): ([usize; 3], [usize; 3])) -> Result<(), VolumeError> {
    for x in min[0]..=max[0] {
        for y in min[1]..=max[1] {
            for z in min[2]..=max[2] {
                volume.set(Coord3::new(x, y, z), ROCK)?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let values = CellValues::default();

    // ── 1. Build the volume ─────────────────────────────────────
    let mut volume = Volume::filled(Dims::new(SIDE, SIDE, SIDE), FLUID)?;
    for grain in [GRAIN_A, GRAIN_B, GRAIN_C] {
        fill_block(&mut volume, grain)?;
    }
    volume.set(SAMPLE_A, 35)?;
    volume.set(SAMPLE_B, 120)?;

    let census = volume.census(&values);
    println!(
        "volume {}: {} fluid, {} rock, {} samples",
        volume.dims(),
        census.fluid,
        census.solid,
        census.sample
    );

    // ── 2. Segment and reduce ───────────────────────────────────
    let segmentation = ComponentSegmenter::new(values).segment(&volume);
    println!(
        "{} grains, sizes {:?}",
        segmentation.component_count(),
        segmentation.component_sizes()
    );

    let reduction = SurfaceReduction::builder().values(values).build()?;
    let reduced = reduction.apply(&volume);
    println!(
        "surface reduction demoted {} interior cells",
        reduced.demoted
    );

    // ── 3. Plan ─────────────────────────────────────────────────
    let planner = PathPlanner::new(PlannerConfig {
        reduce_surface: true,
        ..PlannerConfig::default()
    })?;
    let out = planner.plan(&volume)?;

    for set in &out.path_sets {
        println!(
            "grain {}: {} sources, {} paths, {} unreachable",
            set.label(),
            set.source_count(),
            set.reachable_count(),
            set.unreachable_count()
        );
    }

    // ── 4. Look up paths ────────────────────────────────────────
    let far_corner = Coord3::new(3, 4, 3);
    for (source, path) in out.paths_to(far_corner) {
        let cells: Vec<String> = path.cells().iter().map(|c| c.to_string()).collect();
        println!(
            "{source} -> {far_corner}: cost {:.3} via {}",
            path.cost(),
            cells.join(" ")
        );
    }

    let m = &out.metrics;
    println!(
        "searches {} on {} workers, {} paths in {} us",
        m.searches_run, m.workers, m.paths_found, m.total_us
    );
    Ok(())
}
