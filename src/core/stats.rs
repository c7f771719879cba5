//! Statistics tracking and reporting for a clone run

use std::time::Duration;

use crate::clone::CloneOutcome;

/// Statistics for tracking repository clone results
#[derive(Clone, Debug, Default)]
pub struct CloneStatistics {
    pub cloned_repos: u32,
    pub total_attempts: u32,
    pub failed_repos: Vec<(String, String)>, // (repo_name, source_url)
}

impl CloneStatistics {
    /// Creates a new statistics tracker with all counters initialized to zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a worker's outcome
    pub fn update(&mut self, outcome: &CloneOutcome) {
        self.total_attempts += outcome.attempts;
        if outcome.succeeded {
            self.cloned_repos += 1;
        } else {
            self.failed_repos.push((
                outcome.job.name.clone(),
                outcome.job.source_url.clone(),
            ));
        }
    }

    /// Number of jobs that exhausted their attempt budget
    pub fn failed_count(&self) -> usize {
        self.failed_repos.len()
    }

    /// Generates a one-line summary of the run
    pub fn generate_summary(&self, duration: Duration) -> String {
        let duration_secs = duration.as_secs_f64();

        if self.failed_repos.is_empty() {
            format!(
                "✅ Completed in {:.1}s • {} cloned • {} attempts",
                duration_secs, self.cloned_repos, self.total_attempts
            )
        } else {
            format!(
                "✅ Completed in {:.1}s • {} cloned • {} attempts • {} failed",
                duration_secs,
                self.cloned_repos,
                self.total_attempts,
                self.failed_repos.len()
            )
        }
    }

    /// Generates the detailed listing of permanently failed repositories
    pub fn generate_detailed_summary(&self) -> String {
        if self.failed_repos.is_empty() {
            return String::new();
        }

        let mut lines = Vec::new();
        lines.push(format!("🔴 FAILED REPOS ({})", self.failed_repos.len()));
        for (i, (repo_name, source_url)) in self.failed_repos.iter().enumerate() {
            let tree_char = if i == self.failed_repos.len() - 1 {
                "└─"
            } else {
                "├─"
            };
            lines.push(format!("   {} {:20} {}", tree_char, repo_name, source_url));
        }

        lines.join("\n")
    }
}
