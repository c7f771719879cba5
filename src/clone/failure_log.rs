//! Append-only log of permanently failed clone jobs

use chrono::{SecondsFormat, Utc};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::CloneJob;

/// Durable, write-only audit trail for jobs that exhausted their attempt budget
///
/// The path is injected explicitly so nothing here depends on the process
/// working directory. Appends are serialized through a mutex: up to
/// `parallelism` workers can fail at batch-drain time and their entries must
/// not interleave. The file is only created once the first entry is recorded.
pub struct FailureLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FailureLog {
    /// Creates a log bound to an explicit path; the file is opened lazily
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry for a permanently failed job
    ///
    /// Best effort: a write failure is reported on stderr and never fails
    /// the run.
    pub fn record(&self, job: &CloneJob) {
        let job_json =
            serde_json::to_string_pretty(job).unwrap_or_else(|_| format!("{:?}", job));
        let entry = format!(
            "\n\n{} Failed to clone {}",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            job_json
        );

        let _guard = match self.lock.lock() {
            Ok(guard) => guard,
            // A poisoned lock only means another writer panicked; the log
            // itself is still usable.
            Err(poisoned) => poisoned.into_inner(),
        };
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(entry.as_bytes()));
        if let Err(e) = result {
            eprintln!(
                "failed to write failure log entry for {} to {}: {}",
                job.name,
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn job(name: &str) -> CloneJob {
        CloneJob {
            source_url: format!("git@github.com:acme/{}.git", name),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_file_is_created_lazily() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log = FailureLog::new(temp_dir.path().join("errors.log.txt"));
        assert!(!log.path().exists());

        log.record(&job("widgets"));
        assert!(log.path().exists());
    }

    #[test]
    fn test_entries_are_appended_with_timestamp_and_job_json() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log = FailureLog::new(temp_dir.path().join("errors.log.txt"));

        log.record(&job("widgets"));
        log.record(&job("gadgets"));

        let contents = std::fs::read_to_string(log.path()).expect("Failed to read log");
        assert_eq!(contents.matches("Failed to clone").count(), 2);
        assert!(contents.contains("\"name\": \"widgets\""));
        assert!(contents.contains("\"name\": \"gadgets\""));
        assert!(contents.contains("git@github.com:acme/widgets.git"));
        // Each entry opens with a blank-line separator
        assert!(contents.starts_with("\n\n"));
    }

    #[test]
    fn test_unwritable_path_does_not_panic() {
        let log = FailureLog::new(PathBuf::from("/nonexistent-dir/errors.log.txt"));
        log.record(&job("widgets"));
    }
}
