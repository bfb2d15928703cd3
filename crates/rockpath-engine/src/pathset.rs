//! Per-component collections of reconstructed paths.

use indexmap::IndexMap;
use rockpath_core::{ComponentLabel, Coord3};
use rockpath_path::{Path, SearchError};

/// Outcome per target for one source, in canonical target order.
pub type Targets = IndexMap<Coord3, Result<Path, SearchError>>;

/// Every path planned inside one connected component.
///
/// Maps each sample source to the outcome for every other non-fluid cell
/// of the component. Sources and targets keep canonical scan order. A
/// target with no path from its source carries
/// [`SearchError::Unreachable`] without affecting its siblings.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSet {
    label: ComponentLabel,
    sources: IndexMap<Coord3, Targets>,
}

impl PathSet {
    /// An empty set for `label`.
    pub fn new(label: ComponentLabel) -> Self {
        Self {
            label,
            sources: IndexMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, source: Coord3, targets: Targets) {
        self.sources.insert(source, targets);
    }

    /// Component this set belongs to.
    pub fn label(&self) -> ComponentLabel {
        self.label
    }

    /// Sources in canonical order.
    pub fn sources(&self) -> impl Iterator<Item = Coord3> + '_ {
        self.sources.keys().copied()
    }

    /// Number of sources searched.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// `true` if no source was searched.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Target outcomes for one source.
    pub fn targets_of(&self, source: Coord3) -> Option<&Targets> {
        self.sources.get(&source)
    }

    /// Outcome for one `(source, target)` pair.
    pub fn outcome(&self, source: Coord3, target: Coord3) -> Option<&Result<Path, SearchError>> {
        self.sources.get(&source)?.get(&target)
    }

    /// The path from `source` to `target`, if one was found.
    pub fn path_between(&self, source: Coord3, target: Coord3) -> Option<&Path> {
        self.outcome(source, target)?.as_ref().ok()
    }

    /// Every source's path to `target`, in source order. Sources that
    /// cannot reach it are omitted.
    pub fn paths_to(&self, target: Coord3) -> impl Iterator<Item = (Coord3, &Path)> + '_ {
        self.sources.iter().filter_map(move |(&source, targets)| {
            targets
                .get(&target)
                .and_then(|o| o.as_ref().ok())
                .map(|p| (source, p))
        })
    }

    /// `(source, target, outcome)` triples in order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord3, Coord3, &Result<Path, SearchError>)> + '_ {
        self.sources.iter().flat_map(|(&source, targets)| {
            targets
                .iter()
                .map(move |(&target, outcome)| (source, target, outcome))
        })
    }

    /// Number of targets with a path, over all sources.
    pub fn reachable_count(&self) -> usize {
        self.iter().filter(|(_, _, o)| o.is_ok()).count()
    }

    /// Number of targets without a path, over all sources.
    pub fn unreachable_count(&self) -> usize {
        self.iter().filter(|(_, _, o)| o.is_err()).count()
    }
}
