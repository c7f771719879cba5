//! GitHub organization listing

pub mod api;

pub use api::{into_clone_jobs, list_org_repos, RepoInfo};
