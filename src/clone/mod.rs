//! Bounded-concurrency clone orchestration
//!
//! This module is the heart of the tool:
//! - Batching of the job list into CPU-sized groups
//! - Per-repository clone execution with bounded retry
//! - Sequential batch orchestration with a durable failure log

pub mod backend;
pub mod batch;
pub mod failure_log;
pub mod orchestrator;
pub mod worker;

pub use backend::{CloneBackend, GitCloneBackend};
pub use batch::batch_jobs;
pub use failure_log::FailureLog;
pub use orchestrator::Orchestrator;
pub use worker::clone_with_retry;

use serde::Serialize;

/// One repository to clone: where from, and the directory name to clone into
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CloneJob {
    pub source_url: String,
    pub name: String,
}

/// Result of a clone worker after success or retry exhaustion
#[derive(Clone, Debug)]
pub struct CloneOutcome {
    pub job: CloneJob,
    pub succeeded: bool,
    pub attempts: u32,
}
