//! Path planning across connected components of digital rock volumes.
//!
//! [`PathPlanner`] ties the pipeline together: it segments a volume into
//! components, optionally strips interior solid from each, and runs one
//! shortest-path search per sample cell on a worker pool. Results come
//! back as one [`PathSet`] per component plus a [`PlanMetrics`] record.
//!
//! Output is identical for any worker count. Cancellation through a
//! [`CancelToken`] stops new searches from being issued.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cancel;
pub mod config;
pub mod error;
pub mod metrics;
pub mod pathset;
pub mod planner;
mod worker;

pub use cancel::CancelToken;
pub use config::{ConfigError, PlannerConfig};
pub use error::PlanError;
pub use metrics::PlanMetrics;
pub use pathset::{PathSet, Targets};
pub use planner::{PathPlanner, PlanOutput};
