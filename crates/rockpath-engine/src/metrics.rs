//! Per-run metrics for the path planner.
//!
//! [`PlanMetrics`] captures timing and work counters for one
//! [`PathPlanner::plan`](crate::PathPlanner::plan) call.

/// Timing and work counters collected during a single plan.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanMetrics {
    /// Wall-clock time for the entire plan, in microseconds.
    pub total_us: u64,
    /// Time spent labelling components, in microseconds.
    pub segmentation_us: u64,
    /// Time spent on surface reduction, in microseconds.
    pub reduction_us: u64,
    /// Time spent in path searches and reconstruction, in microseconds.
    pub search_us: u64,
    /// Number of connected components found.
    pub component_count: usize,
    /// Components skipped because they hold no samples.
    pub skipped_components: usize,
    /// Cells demoted to fluid by surface reduction, summed over components.
    pub demoted_cells: usize,
    /// Single-source searches completed.
    pub searches_run: usize,
    /// Searches never started because the plan was cancelled.
    pub searches_skipped: usize,
    /// Targets with a reconstructed path.
    pub paths_found: usize,
    /// Targets with no path from their source.
    pub unreachable_targets: usize,
    /// Worker threads used for the search phase.
    pub workers: usize,
    /// Whether the plan was cancelled before every search ran.
    pub cancelled: bool,
}
