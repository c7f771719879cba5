//! Core infrastructure: configuration and run statistics

pub mod config;
pub mod stats;

pub use config::{get_clone_parallelism, FAILURE_LOG_FILENAME, MAXIMUM_ATTEMPT_COUNT};
pub use stats::CloneStatistics;
