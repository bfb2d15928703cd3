//! End-to-end planning over the canonical fixtures.

use rockpath_core::{CellValues, ComponentLabel, Coord3};
use rockpath_engine::{PathPlanner, PlanError, PlannerConfig};
use rockpath_path::SearchError;
use rockpath_space::Connectivity;
use rockpath_test_utils::fixtures::{
    centered_block_with_sample, parallel_slabs, BLOCK_CENTRE, BLOCK_OPPOSITE, BLOCK_SAMPLE,
};
use rockpath_test_utils::VolumeBuilder;
use std::f64::consts::SQRT_2;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn planner(reduce_surface: bool) -> PathPlanner {
    PathPlanner::new(PlannerConfig {
        reduce_surface,
        worker_count: Some(2),
        ..PlannerConfig::default()
    })
    .unwrap()
}

// ── Centred block ───────────────────────────────────────────────

#[test]
fn block_without_reduction() {
    let out = planner(false).plan(&centered_block_with_sample()).unwrap();
    assert_eq!(out.metrics.component_count, 1);
    assert_eq!(out.segmentation.component_sizes(), &[27]);
    assert_eq!(out.metrics.searches_run, 1);
    assert_eq!(out.metrics.paths_found, 26);
    assert_eq!(out.metrics.unreachable_targets, 0);
    assert_eq!(out.metrics.demoted_cells, 0);

    let set = out.path_set(ComponentLabel(1)).unwrap();
    let path = set.path_between(BLOCK_SAMPLE, BLOCK_OPPOSITE).unwrap();
    assert!(close(path.cost(), 2.0 * SQRT_3));
    assert_eq!(path.cells(), &[BLOCK_SAMPLE, BLOCK_CENTRE, BLOCK_OPPOSITE]);
}

#[test]
fn block_with_reduction_detours_round_the_centre() {
    let out = planner(true).plan(&centered_block_with_sample()).unwrap();
    assert_eq!(out.metrics.demoted_cells, 1);
    let searched = out.searched_volume(ComponentLabel(1)).unwrap();
    assert_eq!(searched.get(BLOCK_CENTRE), Some(1));
    assert_eq!(searched.get(BLOCK_OPPOSITE), Some(0));

    let set = out.path_set(ComponentLabel(1)).unwrap();
    let targets = set.targets_of(BLOCK_SAMPLE).unwrap();
    assert_eq!(targets.len(), 25);
    assert!(!targets.contains_key(&BLOCK_CENTRE));

    let path = set.path_between(BLOCK_SAMPLE, BLOCK_OPPOSITE).unwrap();
    assert!(close(path.cost(), SQRT_3 + SQRT_2 + 1.0), "cost = {}", path.cost());
    assert_eq!(path.steps(), 3);
    assert!(!path.cells().contains(&BLOCK_CENTRE));
}

// ── Parallel slabs ──────────────────────────────────────────────

#[test]
fn slabs_plan_only_the_sampled_wall() {
    let out = planner(false).plan(&parallel_slabs(10)).unwrap();
    assert_eq!(out.metrics.component_count, 2);
    assert_eq!(out.metrics.skipped_components, 1);
    assert_eq!(out.metrics.searches_run, 2);
    assert_eq!(out.metrics.paths_found, 2 * 199);

    let wall = out.path_set(ComponentLabel(1)).unwrap();
    assert_eq!(
        wall.sources().collect::<Vec<_>>(),
        vec![Coord3::new(0, 0, 0), Coord3::new(0, 3, 9)]
    );
    assert!(out.path_set(ComponentLabel(2)).unwrap().is_empty());

    // Both samples reach the far corner of their wall.
    let corner = Coord3::new(1, 9, 9);
    assert_eq!(out.paths_to(corner).count(), 2);
}

// ── Reachability ────────────────────────────────────────────────

#[test]
fn coarser_search_leaves_corner_contacts_unreachable() {
    // Two cells touching only at a corner share a 26-component, but a
    // 6-connected search cannot step between them.
    let v = VolumeBuilder::fluid(2, 2, 2)
        .cell([0, 0, 0], 42)
        .cell([1, 1, 1], 0)
        .build();
    let out = PathPlanner::new(PlannerConfig {
        connectivity: Connectivity::Face6,
        ..PlannerConfig::default()
    })
    .unwrap()
    .plan(&v)
    .unwrap();
    assert_eq!(out.metrics.component_count, 1);
    assert_eq!(out.metrics.unreachable_targets, 1);

    let set = out.path_set(ComponentLabel(1)).unwrap();
    assert_eq!(
        set.outcome(Coord3::new(0, 0, 0), Coord3::new(1, 1, 1)),
        Some(&Err(SearchError::Unreachable {
            source: Coord3::new(0, 0, 0),
            target: Coord3::new(1, 1, 1),
        }))
    );
}

#[test]
fn custom_fluid_value_flows_through() {
    let v = VolumeBuilder::new(rockpath_core::Dims::new(1, 1, 4), 7)
        .cell([0, 0, 0], 42)
        .cell([0, 0, 1], 0)
        .cell([0, 0, 3], 0)
        .build();
    let values = CellValues::with_fluid(7);
    let out = PathPlanner::new(PlannerConfig {
        values,
        ..PlannerConfig::default()
    })
    .unwrap()
    .plan(&v)
    .unwrap();
    assert_eq!(out.metrics.component_count, 2);
    assert_eq!(out.metrics.skipped_components, 1);
    assert_eq!(out.metrics.paths_found, 1);
}

#[test]
fn single_search_rejects_out_of_bounds() {
    let err = planner(false)
        .search(&centered_block_with_sample(), Coord3::new(0, 5, 0))
        .unwrap_err();
    assert!(matches!(
        err,
        PlanError::Search(SearchError::OutOfBounds { .. })
    ));
}
