//! File logging via `tracing` + `tracing-subscriber`.
//!
//! The menu owns the terminal, so nothing is ever written to stderr while
//! it runs. Level comes from `GIT_TRAINER_LOG` (an `EnvFilter` directive),
//! defaulting to `info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GIT_TRAINER_LOG";
const LOG_DIR: &str = ".git-trainer";
const LOG_FILE: &str = "git-trainer.log";

/// Install the global subscriber, appending to `log_file` or the default path.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let path = log_file.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    Ok(())
}

/// `~/.git-trainer/git-trainer.log`
fn default_log_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(LOG_DIR).join(LOG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path() {
        let path = default_log_path();
        assert!(path.ends_with(".git-trainer/git-trainer.log"));
    }
}
