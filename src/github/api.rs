//! Organization repository listing over the GitHub REST API
//!
//! A single listing call resolves the organization into a flat list of
//! clone jobs. Pagination and rate-limit handling are out of scope; the
//! page size covers typical organizations.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::clone::CloneJob;
use crate::core::config::LISTING_PAGE_SIZE;

const GITHUB_API_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("org-clone/", env!("CARGO_PKG_VERSION"));

/// One repository as returned by the organization listing call
#[derive(Clone, Debug, Deserialize)]
pub struct RepoInfo {
    pub name: String,
    pub ssh_url: String,
    /// On-disk size in kilobytes as reported by GitHub
    #[serde(default)]
    pub size: u64,
}

/// Lists every repository in the organization (single page)
pub async fn list_org_repos(token: &str, org: &str) -> Result<Vec<RepoInfo>> {
    let url = format!(
        "{}/orgs/{}/repos?type=all&per_page={}",
        GITHUB_API_BASE_URL, org, LISTING_PAGE_SIZE
    );

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", "application/vnd.github+json")
        .bearer_auth(token)
        .send()
        .await
        .with_context(|| format!("failed to list repositories for organization {}", org))?;

    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "GitHub API returned HTTP {} listing organization {}",
            response.status(),
            org
        ));
    }

    response
        .json::<Vec<RepoInfo>>()
        .await
        .context("failed to decode GitHub repository listing")
}

/// Maps the listing to clone jobs, smallest repositories first
///
/// Cloning small repositories first fills early batches with quick wins
/// instead of serializing behind the largest clones.
pub fn into_clone_jobs(mut repos: Vec<RepoInfo>) -> Vec<CloneJob> {
    repos.sort_by_key(|repo| repo.size);
    repos
        .into_iter()
        .map(|repo| CloneJob {
            source_url: repo.ssh_url,
            name: repo.name,
        })
        .collect()
}
