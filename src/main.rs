//! org-clone: clone every repository in a GitHub organization
//!
//! Lists the organization's repositories over the GitHub REST API and clones
//! them concurrently in fixed-size batches, retrying transient failures and
//! recording permanent ones in an append-only log file.

use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, Command as ClapCommand};
use std::sync::Arc;

use org_clone::auth;
use org_clone::clone::{FailureLog, GitCloneBackend, Orchestrator};
use org_clone::core::{get_clone_parallelism, FAILURE_LOG_FILENAME};
use org_clone::github;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapCommand::new("org-clone")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Clones every repository in a GitHub organization")
        .arg(
            Arg::new("org")
                .long("org")
                .value_name("NAME")
                .help("GitHub organization to clone (prompted for if omitted)"),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .value_name("PATH")
                .help("Destination directory for the clones (prompted for if omitted)"),
        )
        .arg(
            Arg::new("jobs")
                .long("jobs")
                .short('j')
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Number of concurrent clones (default: logical CPU count)"),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .help("Clone one repository at a time")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // Startup preconditions: token, organization, destination. All fatal if
    // missing; nothing is cloned before all three are resolved.
    let token = match auth::load_token() {
        Some(token) => token,
        None => auth::prompt_line("Please enter your GitHub token")?
            .ok_or_else(|| anyhow!("not enough info provided: a GitHub token is required"))?,
    };

    let org = match matches.get_one::<String>("org") {
        Some(org) => org.clone(),
        None => auth::prompt_line("Please enter the org name")?
            .ok_or_else(|| anyhow!("not enough info provided: an organization name is required"))?,
    };

    if let Err(e) = auth::save_token(&token) {
        eprintln!("warning: could not cache token: {:#}", e);
    }

    let repos = github::list_org_repos(&token, &org).await?;
    let jobs = github::into_clone_jobs(repos);

    let dirname = match matches.get_one::<String>("dir") {
        Some(dir) => dir.clone(),
        None => auth::prompt_line("Please enter the directory you want to clone to")?
            .ok_or_else(|| anyhow!("not enough info provided: a destination directory is required"))?,
    };
    let cwd = std::env::current_dir()?;
    let dest_dir = cwd.join(dirname);

    let parallelism = get_clone_parallelism(
        matches.get_one::<usize>("jobs").copied(),
        matches.get_flag("sequential"),
    );

    let total_repos = jobs.len();
    let repo_word = if total_repos == 1 {
        "repository"
    } else {
        "repositories"
    };
    println!(
        "🚀 Cloning {} {} from {} into {} ({} concurrent)",
        total_repos,
        repo_word,
        org,
        dest_dir.display(),
        parallelism
    );

    let failure_log = Arc::new(FailureLog::new(cwd.join(FAILURE_LOG_FILENAME)));
    let orchestrator = Orchestrator::new(Arc::new(GitCloneBackend), dest_dir, failure_log);

    let start_time = std::time::Instant::now();
    let stats = orchestrator.run(&jobs, parallelism).await?;

    println!("\n{}", stats.generate_summary(start_time.elapsed()));
    let detailed_summary = stats.generate_detailed_summary();
    if !detailed_summary.is_empty() {
        println!("\n{}", "━".repeat(70));
        println!("{}", detailed_summary);
        println!("{}", "━".repeat(70));
        println!("See {} for the durable failure log.", FAILURE_LOG_FILENAME);
    }

    // Partial failure is also surfaced through the exit status
    if stats.failed_count() > 0 {
        std::process::exit(1);
    }

    Ok(())
}
