//! GitHub token cache and interactive prompts
//!
//! The token entered on first use is cached under the user's home directory
//! so later runs skip the prompt. Everything here is startup glue: a missing
//! token or organization name aborts the run before any cloning begins.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const TOKEN_FILENAME: &str = "token";
const CONFIG_DIR_NAME: &str = "org-clone";

/// Path of the cached token file, `~/.config/org-clone/token`
pub fn token_cache_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join(CONFIG_DIR_NAME)
            .join(TOKEN_FILENAME)
    })
}

/// Reads the cached token, if any; a missing or empty file is not an error
pub fn load_token() -> Option<String> {
    load_token_from(&token_cache_path()?)
}

pub fn load_token_from(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(token) if !token.trim().is_empty() => Some(token.trim().to_string()),
        _ => None,
    }
}

/// Persists the token for later runs
pub fn save_token(token: &str) -> Result<()> {
    let path =
        token_cache_path().ok_or_else(|| anyhow::anyhow!("could not find home directory"))?;
    save_token_to(&path, token)
}

pub fn save_token_to(path: &Path, token: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, token).with_context(|| format!("failed to save token to {}", path.display()))
}

/// Prompts on stdin for a single line; an empty answer becomes `None`
pub fn prompt_line(message: &str) -> Result<Option<String>> {
    print!("{}: ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
