//! Search worker pool for the path planner.
//!
//! Each worker receives [`SearchTask`] requests via a crossbeam channel,
//! runs one single-source search over its component's sub-volume,
//! reconstructs a path to every target, and sends the result back over a
//! shared reply channel.
//!
//! Workers are scoped threads borrowing the read-only sub-volumes and
//! target lists, and each allocates its own distance/parent grids. The
//! dispatcher feeds a bounded queue and stops feeding once the
//! [`CancelToken`] fires; tasks already handed out run to completion.

use std::thread;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use rockpath_core::{Coord3, Volume};
use rockpath_path::{Dijkstra3D, SearchError};

use crate::cancel::CancelToken;
use crate::error::PlanError;
use crate::pathset::Targets;

/// One `(component, source)` search.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchTask {
    /// Position of the task in dispatch order.
    pub seq: usize,
    /// Index of the component's sub-volume.
    pub slot: usize,
    /// Search origin.
    pub source: Coord3,
}

/// Result of one task.
pub(crate) struct SearchResult {
    pub seq: usize,
    pub outcome: Result<Targets, SearchError>,
}

/// Read-only inputs shared by every worker.
pub(crate) struct SearchInputs<'a> {
    pub search: Dijkstra3D,
    pub volumes: &'a [&'a Volume],
    pub targets: &'a [Vec<Coord3>],
}

impl SearchInputs<'_> {
    /// Run one task to completion.
    pub fn execute(&self, task: SearchTask) -> SearchResult {
        let outcome = self
            .search
            .parental_field(self.volumes[task.slot], task.source)
            .map(|field| {
                self.targets[task.slot]
                    .iter()
                    .filter(|&&t| t != task.source)
                    .map(|&t| (t, field.path_to(t)))
                    .collect()
            });
        SearchResult {
            seq: task.seq,
            outcome,
        }
    }
}

fn worker_loop(inputs: &SearchInputs<'_>, tasks: Receiver<SearchTask>, results: Sender<SearchResult>) {
    while let Ok(task) = tasks.recv() {
        if results.send(inputs.execute(task)).is_err() {
            break;
        }
    }
}

/// Run `tasks` on `workers` threads.
///
/// Returns one slot per task, in dispatch order; `None` marks tasks that
/// were never started because `cancel` fired.
pub(crate) fn run_pool(
    inputs: &SearchInputs<'_>,
    tasks: &[SearchTask],
    workers: usize,
    cancel: &CancelToken,
) -> Result<Vec<Option<Result<Targets, SearchError>>>, PlanError> {
    let mut slots: Vec<Option<Result<Targets, SearchError>>> = Vec::new();
    slots.resize_with(tasks.len(), || None);
    if tasks.is_empty() {
        return Ok(slots);
    }

    let workers = workers.min(tasks.len()).max(1);
    let (task_tx, task_rx) = bounded::<SearchTask>(workers);
    let (result_tx, result_rx) = unbounded::<SearchResult>();

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        for i in 0..workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            let spawned = thread::Builder::new()
                .name(format!("rockpath-search-{i}"))
                .spawn_scoped(scope, move || worker_loop(inputs, task_rx, result_tx));
            match spawned {
                Ok(h) => handles.push(h),
                Err(e) => {
                    drop(task_tx);
                    for h in handles {
                        let _ = h.join();
                    }
                    return Err(PlanError::ThreadSpawnFailed {
                        reason: format!("search worker {i}: {e}"),
                    });
                }
            }
        }
        drop(task_rx);
        drop(result_tx);

        for &task in tasks {
            if cancel.is_cancelled() || task_tx.send(task).is_err() {
                break;
            }
        }
        drop(task_tx);

        let mut panicked = false;
        for h in handles {
            panicked |= h.join().is_err();
        }
        if panicked {
            return Err(PlanError::WorkerPanicked);
        }
        Ok(())
    })?;

    for result in result_rx.try_iter() {
        slots[result.seq] = Some(result.outcome);
    }
    Ok(slots)
}
