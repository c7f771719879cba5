//! Common test utilities and helpers
#![allow(dead_code)]

pub mod backends;
pub mod git;

pub use self::backends::{CountingBackend, ScriptedBackend};
pub use self::git::{create_source_repo, is_git_available};

use org_clone::clone::CloneJob;

/// Builds a clone job for a named repository
pub fn job(name: &str) -> CloneJob {
    CloneJob {
        source_url: format!("git@github.com:acme/{}.git", name),
        name: name.to_string(),
    }
}
