//! Single-repository clone execution with bounded retry

use std::path::Path;

use super::{CloneBackend, CloneJob, CloneOutcome};
use crate::core::config::MAXIMUM_ATTEMPT_COUNT;

/// Clones one repository, retrying immediately on failure
///
/// Retries have no backoff; the budget assumes transient failures clear
/// quickly. Never returns an error: every subprocess failure becomes either
/// the next attempt or a negative [`CloneOutcome`] once the budget is spent.
pub async fn clone_with_retry(
    backend: &dyn CloneBackend,
    job: &CloneJob,
    dest_dir: &Path,
) -> CloneOutcome {
    let mut attempts = 0;

    while attempts < MAXIMUM_ATTEMPT_COUNT {
        attempts += 1;
        println!(
            "Attempting to clone {}, attempt number: {}",
            job.source_url, attempts
        );

        match backend.clone_repo(job, dest_dir).await {
            Ok(()) => {
                return CloneOutcome {
                    job: job.clone(),
                    succeeded: true,
                    attempts,
                };
            }
            Err(e) => {
                eprintln!("failed to clone {}: {:#}", job.source_url, e);
            }
        }
    }

    eprintln!(
        "giving up on {} after {} failed attempts",
        job.source_url, MAXIMUM_ATTEMPT_COUNT
    );
    CloneOutcome {
        job: job.clone(),
        succeeded: false,
        attempts,
    }
}
