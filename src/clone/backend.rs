//! Clone execution backends

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

use super::CloneJob;
use crate::core::config::CLONE_ATTEMPT_TIMEOUT_SECS;

/// Trait for clone operations to implement
///
/// The orchestrator and worker only see this seam, so tests can substitute
/// instrumented backends for the real git subprocess.
#[async_trait]
pub trait CloneBackend: Send + Sync {
    /// Clones `job.source_url` into `dest_dir/job.name`
    ///
    /// A failed attempt may leave a partial directory behind; it is not
    /// rolled back.
    async fn clone_repo(&self, job: &CloneJob, dest_dir: &Path) -> Result<()>;
}

/// Backend that shells out to the system `git` binary
pub struct GitCloneBackend;

#[async_trait]
impl CloneBackend for GitCloneBackend {
    async fn clone_repo(&self, job: &CloneJob, dest_dir: &Path) -> Result<()> {
        let target = dest_dir.join(&job.name);
        let timeout_duration = Duration::from_secs(CLONE_ATTEMPT_TIMEOUT_SECS);

        let result = tokio::time::timeout(
            timeout_duration,
            Command::new("git")
                .arg("clone")
                .arg(&job.source_url)
                .arg(&target)
                .output(),
        )
        .await;

        match result {
            Ok(Ok(output)) if output.status.success() => Ok(()),
            Ok(Ok(output)) => {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                Err(anyhow::anyhow!(
                    "git clone exited with {}: {}",
                    output.status,
                    stderr
                ))
            }
            Ok(Err(e)) => Err(e.into()),
            Err(_) => Err(anyhow::anyhow!(
                "git clone timed out after {} seconds",
                CLONE_ATTEMPT_TIMEOUT_SECS
            )),
        }
    }
}
