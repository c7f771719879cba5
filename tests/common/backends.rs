//! Instrumented clone backends for orchestrator tests

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use org_clone::clone::{CloneBackend, CloneJob};

/// Records how many clones are in flight at once and the peak observed
pub struct CountingBackend {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    delay: Duration,
}

impl CountingBackend {
    pub fn new(delay: Duration) -> Self {
        Self {
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            delay,
        }
    }

    pub fn max_observed(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CloneBackend for CountingBackend {
    async fn clone_repo(&self, _job: &CloneJob, _dest_dir: &Path) -> Result<()> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        tokio::time::sleep(self.delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Succeeds or fails per job name; successes materialize the target directory
/// the way a real clone would
pub struct ScriptedBackend {
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new(failing: &[&str]) -> Self {
        Self {
            failing: failing.iter().map(|name| name.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Job names in the order the backend was invoked
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CloneBackend for ScriptedBackend {
    async fn clone_repo(&self, job: &CloneJob, dest_dir: &Path) -> Result<()> {
        self.calls.lock().unwrap().push(job.name.clone());

        if self.failing.contains(&job.name) {
            anyhow::bail!("simulated clone failure for {}", job.name);
        }

        std::fs::create_dir_all(dest_dir.join(&job.name))?;
        Ok(())
    }
}
