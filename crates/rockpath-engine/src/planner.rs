//! The path planner: segmentation, optional reduction, and fan-out search.

use std::time::Instant;

use rockpath_core::{ComponentLabel, Coord3, Volume};
use rockpath_ops::{ComponentSegmenter, Segmentation, SurfaceReduction};
use rockpath_path::{Dijkstra3D, ParentalField, Path};
use tracing::{debug, info, warn};

use crate::cancel::CancelToken;
use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::metrics::PlanMetrics;
use crate::pathset::PathSet;
use crate::worker::{run_pool, SearchInputs, SearchTask};

// ── PlanOutput ─────────────────────────────────────────────────────

/// Everything one [`PathPlanner::plan`] call produced.
#[derive(Debug)]
pub struct PlanOutput {
    /// Components of the input volume.
    pub segmentation: Segmentation,
    /// Reduced sub-volumes in label order. Empty unless surface reduction
    /// is enabled.
    pub reduced: Vec<Volume>,
    /// One path set per component, in label order. Components without
    /// samples get an empty set.
    pub path_sets: Vec<PathSet>,
    /// Timing and work counters.
    pub metrics: PlanMetrics,
}

impl PlanOutput {
    /// The volume actually searched for `label`: the reduced sub-volume
    /// when reduction ran, the plain sub-volume otherwise.
    pub fn searched_volume(&self, label: ComponentLabel) -> Option<&Volume> {
        if self.reduced.is_empty() {
            self.segmentation.sub_volume(label)
        } else {
            self.segmentation
                .sub_volume(label)
                .and_then(|_| self.reduced.get(label.index()))
        }
    }

    /// Path set of one component.
    pub fn path_set(&self, label: ComponentLabel) -> Option<&PathSet> {
        self.segmentation
            .sub_volume(label)
            .and_then(|_| self.path_sets.get(label.index()))
    }

    /// Every path to `target` across all components.
    pub fn paths_to(&self, target: Coord3) -> impl Iterator<Item = (Coord3, &Path)> + '_ {
        self.path_sets.iter().flat_map(move |ps| ps.paths_to(target))
    }
}

// ── PathPlanner ────────────────────────────────────────────────────

/// Plans shortest paths from every sample to every occupied cell of its
/// connected component.
///
/// # Lifecycle
///
/// ```text
/// PathPlanner::new(config) → plan(volume) → PlanOutput
///                          → plan(volume) → ...
/// ```
///
/// The planner holds no per-run state, so one instance can plan any
/// number of volumes.
#[derive(Clone, Debug)]
pub struct PathPlanner {
    config: PlannerConfig,
    search: Dijkstra3D,
    segmenter: ComponentSegmenter,
    reduction: Option<SurfaceReduction>,
    workers: usize,
}

impl PathPlanner {
    /// Validate `config` and build a planner from it.
    pub fn new(config: PlannerConfig) -> Result<Self, PlanError> {
        config.validate()?;
        let reduction = if config.reduce_surface {
            Some(config.surface_reduction()?)
        } else {
            None
        };
        Ok(Self {
            search: Dijkstra3D::new(config.connectivity, config.values),
            segmenter: ComponentSegmenter::new(config.values),
            reduction,
            workers: config.resolved_worker_count(),
            config,
        })
    }

    /// The configuration this planner was built from.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Resolved worker thread count.
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Plan every component of `volume` to completion.
    pub fn plan(&self, volume: &Volume) -> Result<PlanOutput, PlanError> {
        self.plan_with_cancel(volume, &CancelToken::new())
    }

    /// Plan every component of `volume`, stopping early if `cancel` fires.
    ///
    /// A cancelled plan still returns `Ok`: searches that started are kept,
    /// the rest are counted in [`PlanMetrics::searches_skipped`] and
    /// [`PlanMetrics::cancelled`] is set.
    pub fn plan_with_cancel(
        &self,
        volume: &Volume,
        cancel: &CancelToken,
    ) -> Result<PlanOutput, PlanError> {
        let started = Instant::now();
        let values = self.config.values;
        let mut metrics = PlanMetrics {
            workers: self.workers,
            ..PlanMetrics::default()
        };
        info!(
            dims = %volume.dims(),
            connectivity = self.config.connectivity.level(),
            reduce_surface = self.config.reduce_surface,
            workers = self.workers,
            "plan started"
        );

        // Segmentation.
        let t = Instant::now();
        let segmentation = self.segmenter.segment(volume);
        metrics.segmentation_us = t.elapsed().as_micros() as u64;
        metrics.component_count = segmentation.component_count();

        // Optional surface reduction.
        let t = Instant::now();
        let mut reduced = Vec::new();
        if let Some(reduction) = &self.reduction {
            reduced.reserve(segmentation.component_count());
            for sub in segmentation.sub_volumes() {
                let out = reduction.apply(sub);
                metrics.demoted_cells += out.demoted;
                reduced.push(out.volume);
            }
        }
        metrics.reduction_us = t.elapsed().as_micros() as u64;

        let searched: Vec<&Volume> = if reduced.is_empty() {
            segmentation.sub_volumes().iter().collect()
        } else {
            reduced.iter().collect()
        };

        // Build tasks: components by label, sources in scan order.
        let mut tasks = Vec::new();
        let mut targets = Vec::with_capacity(searched.len());
        for (slot, (label, sub)) in segmentation.labels().zip(&searched).enumerate() {
            let sources = sub.sample_cells(&values);
            if sources.is_empty() {
                warn!(label = %label, "component has no samples, skipping");
                metrics.skipped_components += 1;
                targets.push(Vec::new());
                continue;
            }
            let occupied = sub.occupied_cells(&values);
            debug!(
                label = %label,
                sources = sources.len(),
                targets = occupied.len(),
                "component queued"
            );
            for source in sources {
                tasks.push(SearchTask {
                    seq: tasks.len(),
                    slot,
                    source,
                });
            }
            targets.push(occupied);
        }

        // Fan out.
        let t = Instant::now();
        let inputs = SearchInputs {
            search: self.search,
            volumes: &searched,
            targets: &targets,
        };
        let outcomes = run_pool(&inputs, &tasks, self.workers, cancel)?;
        metrics.search_us = t.elapsed().as_micros() as u64;

        // Reassemble in dispatch order.
        let mut path_sets: Vec<PathSet> = segmentation.labels().map(PathSet::new).collect();
        for (task, outcome) in tasks.iter().zip(outcomes) {
            match outcome {
                Some(Ok(found)) => {
                    let reachable = found.values().filter(|o| o.is_ok()).count();
                    let unreachable = found.len() - reachable;
                    debug!(
                        label = %path_sets[task.slot].label(),
                        source = %task.source,
                        reachable,
                        unreachable,
                        "source planned"
                    );
                    metrics.searches_run += 1;
                    metrics.paths_found += reachable;
                    metrics.unreachable_targets += unreachable;
                    path_sets[task.slot].insert(task.source, found);
                }
                Some(Err(e)) => return Err(e.into()),
                None => metrics.searches_skipped += 1,
            }
        }

        metrics.cancelled = metrics.searches_skipped > 0;
        if metrics.cancelled {
            warn!(
                run = metrics.searches_run,
                skipped = metrics.searches_skipped,
                "plan cancelled"
            );
        }
        metrics.total_us = started.elapsed().as_micros() as u64;
        info!(
            components = metrics.component_count,
            searches = metrics.searches_run,
            paths = metrics.paths_found,
            unreachable = metrics.unreachable_targets,
            total_us = metrics.total_us,
            "plan complete"
        );

        Ok(PlanOutput {
            segmentation,
            reduced,
            path_sets,
            metrics,
        })
    }

    /// Plan one already-isolated volume on the calling thread.
    ///
    /// Every sample in `volume` is a source and every occupied cell a
    /// target; no segmentation or reduction is applied.
    pub fn plan_component(
        &self,
        volume: &Volume,
        label: ComponentLabel,
    ) -> Result<PathSet, PlanError> {
        let values = self.config.values;
        let volumes = [volume];
        let targets = [volume.occupied_cells(&values)];
        let inputs = SearchInputs {
            search: self.search,
            volumes: &volumes,
            targets: &targets,
        };
        let mut set = PathSet::new(label);
        for (seq, source) in volume.sample_cells(&values).into_iter().enumerate() {
            let result = inputs.execute(SearchTask {
                seq,
                slot: 0,
                source,
            });
            set.insert(source, result.outcome?);
        }
        Ok(set)
    }

    /// Run a single search from `source` with the configured connectivity.
    pub fn search(&self, volume: &Volume, source: Coord3) -> Result<ParentalField, PlanError> {
        Ok(self.search.parental_field(volume, source)?)
    }
}
