//! # org-clone
//!
//! `org-clone` mirrors a GitHub organization to local disk: it lists every
//! repository in the organization and clones them concurrently in fixed-size
//! batches, retrying transient failures and durably recording the permanent
//! ones. It powers the `org-clone` CLI tool.
//!
//! ## Core Features
//!
//! - **Bounded Concurrency**: clones run in batches sized to the host CPU
//!   count, with strict join barriers between batches.
//! - **Bounded Retry**: each repository gets up to 100 immediate attempts
//!   before it is declared a permanent failure.
//! - **Durable Failure Log**: permanently failed jobs are appended to an
//!   on-disk, append-only audit log.
//!
//! ## Example
//!
//! ```rust,no_run
//! use org_clone::clone::{CloneJob, FailureLog, GitCloneBackend, Orchestrator};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let jobs = vec![CloneJob {
//!         source_url: "git@github.com:acme/widgets.git".to_string(),
//!         name: "widgets".to_string(),
//!     }];
//!     let log = Arc::new(FailureLog::new("orgCloneErrors.log.txt".into()));
//!     let orchestrator = Orchestrator::new(Arc::new(GitCloneBackend), "mirror".into(), log);
//!     let stats = orchestrator.run(&jobs, 4).await?;
//!     println!("{} cloned, {} failed", stats.cloned_repos, stats.failed_count());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod clone;
pub mod core;
pub mod github;
