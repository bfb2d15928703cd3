//! Error types for plan runs.

use std::error::Error;
use std::fmt;

use rockpath_path::SearchError;

use crate::config::ConfigError;

/// Errors that abort a whole plan.
///
/// Unreachable targets never surface here: they are recorded per target
/// in the [`PathSet`](crate::PathSet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Configuration failed validation.
    Config(ConfigError),
    /// A search was rejected before it started.
    Search(SearchError),
    /// A search worker thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of which thread failed.
        reason: String,
    },
    /// A search worker panicked.
    WorkerPanicked,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Search(e) => write!(f, "search: {e}"),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
            Self::WorkerPanicked => write!(f, "search worker panicked"),
        }
    }
}

impl Error for PlanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::ThreadSpawnFailed { .. } | Self::WorkerPanicked => None,
        }
    }
}

impl From<ConfigError> for PlanError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SearchError> for PlanError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
