//! Drives batches of clone workers and records permanent failures

use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use std::path::PathBuf;
use std::sync::Arc;

use super::{batch_jobs, clone_with_retry, CloneBackend, CloneJob, FailureLog};
use crate::core::CloneStatistics;

/// Runs clone jobs with bounded concurrency and a durable failure log
pub struct Orchestrator {
    backend: Arc<dyn CloneBackend>,
    dest_dir: PathBuf,
    failure_log: Arc<FailureLog>,
}

impl Orchestrator {
    pub fn new(
        backend: Arc<dyn CloneBackend>,
        dest_dir: PathBuf,
        failure_log: Arc<FailureLog>,
    ) -> Self {
        Self {
            backend,
            dest_dir,
            failure_log,
        }
    }

    /// Clones every job, at most `parallelism` at a time
    ///
    /// Batches run strictly in sequence: the next batch only starts once
    /// every worker in the current one has finished, successes and failures
    /// alike. Jobs within a batch race and their log lines may interleave.
    /// A job that exhausts its attempt budget gets one failure-log entry and
    /// is counted in the returned statistics; it never aborts the run.
    pub async fn run(&self, jobs: &[CloneJob], parallelism: usize) -> Result<CloneStatistics> {
        std::fs::create_dir_all(&self.dest_dir).with_context(|| {
            format!(
                "failed to create destination directory {}",
                self.dest_dir.display()
            )
        })?;

        let mut stats = CloneStatistics::new();

        for batch in batch_jobs(jobs, parallelism) {
            let mut workers = FuturesUnordered::new();
            for job in batch {
                let backend = Arc::clone(&self.backend);
                let dest_dir = self.dest_dir.clone();
                workers
                    .push(async move { clone_with_retry(backend.as_ref(), job, &dest_dir).await });
            }

            // Batch join barrier: drain every worker before moving on
            while let Some(outcome) = workers.next().await {
                if !outcome.succeeded {
                    self.failure_log.record(&outcome.job);
                }
                stats.update(&outcome);
            }
        }

        Ok(stats)
    }
}
