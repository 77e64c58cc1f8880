//! Per-file counting and per-directory aggregation.

mod aggregate;
mod class;
mod types;

pub use aggregate::{FileAnalyzer, FileFailure, MetricsAggregator, ProjectReport};
pub use class::{ClassAnalyzer, ClassScope};
pub use types::{ClassRecord, FileMetrics};
