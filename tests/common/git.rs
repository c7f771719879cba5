//! Git testing utilities

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Checks whether a usable `git` binary is on the PATH
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Initializes a clone-able source repository with one commit at `path`
pub fn create_source_repo(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;

    let init_result = Command::new("git")
        .args(["init"])
        .current_dir(path)
        .output()?;
    if !init_result.status.success() {
        anyhow::bail!("Git not available - skipping test");
    }

    // Configure git user and disable signing so commits work everywhere
    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(path)
        .output()?;
    Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(path)
        .output()?;
    Command::new("git")
        .args(["config", "commit.gpgsign", "false"])
        .current_dir(path)
        .output()?;

    std::fs::write(path.join("README.md"), "# test fixture\n")?;
    Command::new("git")
        .args(["add", "README.md"])
        .current_dir(path)
        .output()?;

    let commit_result = Command::new("git")
        .args(["commit", "-m", "initial commit"])
        .current_dir(path)
        .output()?;
    if !commit_result.status.success() {
        anyhow::bail!(
            "Failed to create commit: {}",
            String::from_utf8_lossy(&commit_result.stderr)
        );
    }

    Ok(())
}
