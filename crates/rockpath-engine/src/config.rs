//! Planner configuration, validation, and error types.
//!
//! [`PlannerConfig`] is the input for constructing a
//! [`PathPlanner`](crate::PathPlanner). [`validate()`](PlannerConfig::validate)
//! checks structural invariants before any volume is touched.

use std::error::Error;
use std::fmt;

use rockpath_core::CellValues;
use rockpath_ops::SurfaceReduction;
use rockpath_space::{Connectivity, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`PlannerConfig::validate()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Topology configuration is invalid.
    Space(SpaceError),
    /// Fluid and solid markers are the same value.
    IndistinctDefaults {
        /// The shared value.
        value: u8,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::IndistinctDefaults { value } => {
                write!(f, "fluid and solid defaults must differ, both are {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::IndistinctDefaults { .. } => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── PlannerConfig ──────────────────────────────────────────────────

/// Configuration for one [`PathPlanner`](crate::PathPlanner).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Fluid and solid markers. Default: fluid 1, solid 0.
    pub values: CellValues,
    /// Neighbour rule for path search. Default: 26.
    pub connectivity: Connectivity,
    /// Strip interior solid from each component before searching.
    /// Default: false.
    pub reduce_surface: bool,
    /// Neighbour rule deciding which solid cells count as interior.
    /// Default: 6, which differs from the search default.
    pub surface_connectivity: Connectivity,
    /// Number of search worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            values: CellValues::default(),
            connectivity: Connectivity::Vertex26,
            reduce_surface: false,
            surface_connectivity: Connectivity::Face6,
            worker_count: None,
        }
    }
}

impl PlannerConfig {
    /// Default configuration searching under a raw connectivity level.
    ///
    /// Fails eagerly with `InvalidConnectivity` for anything other than
    /// 6, 18, or 26.
    pub fn with_connectivity_level(level: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            connectivity: Connectivity::try_from(level)?,
            ..Self::default()
        })
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.values.fluid == self.values.solid {
            return Err(ConfigError::IndistinctDefaults {
                value: self.values.fluid,
            });
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 16),
        }
    }

    /// The surface reducer described by this configuration.
    pub fn surface_reduction(&self) -> Result<SurfaceReduction, ConfigError> {
        SurfaceReduction::builder()
            .values(self.values)
            .connectivity(self.surface_connectivity)
            .build()
            .map_err(|_| ConfigError::IndistinctDefaults {
                value: self.values.fluid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = PlannerConfig::default();
        assert_eq!(c.values, CellValues { fluid: 1, solid: 0 });
        assert_eq!(c.connectivity, Connectivity::Vertex26);
        assert_eq!(c.surface_connectivity, Connectivity::Face6);
        assert!(!c.reduce_surface);
        assert!(c.worker_count.is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn connectivity_level_is_checked_eagerly() {
        let c = PlannerConfig::with_connectivity_level(18).unwrap();
        assert_eq!(c.connectivity, Connectivity::Edge18);
        assert_eq!(
            PlannerConfig::with_connectivity_level(10),
            Err(ConfigError::Space(SpaceError::InvalidConnectivity { value: 10 }))
        );
    }

    #[test]
    fn equal_defaults_rejected() {
        let c = PlannerConfig {
            values: CellValues { fluid: 5, solid: 5 },
            ..PlannerConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::IndistinctDefaults { value: 5 }));
        assert_eq!(
            c.surface_reduction(),
            Err(ConfigError::IndistinctDefaults { value: 5 })
        );
    }

    #[test]
    fn worker_count_clamped() {
        let explicit = |n| PlannerConfig {
            worker_count: Some(n),
            ..PlannerConfig::default()
        };
        assert_eq!(explicit(0).resolved_worker_count(), 1);
        assert_eq!(explicit(8).resolved_worker_count(), 8);
        assert_eq!(explicit(1000).resolved_worker_count(), 64);
        let auto = PlannerConfig::default().resolved_worker_count();
        assert!((1..=16).contains(&auto));
    }

    #[test]
    fn error_source_chain() {
        let e = ConfigError::from(SpaceError::EmptySpace);
        assert!(e.source().is_some());
        assert!(e.to_string().contains("space"));
    }
}
