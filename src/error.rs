use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the collaborator seams (config store, description
/// loader, render loop). Each variant maps to a process exit code.
#[derive(Debug, Error)]
pub enum TrainerError {
    /// Config file exists but could not be read or parsed (exit 2)
    #[error("Failed to load config {}: {message}", path.display())]
    ConfigLoad { path: PathBuf, message: String },

    /// Config file could not be written (non-fatal inside the menu)
    #[error("Failed to save config {}: {message}", path.display())]
    ConfigSave { path: PathBuf, message: String },

    /// Description file exists but is not valid (exit 2)
    #[error("Failed to load description {}: {message}", path.display())]
    DescriptionLoad { path: PathBuf, message: String },

    /// Task id or title did not resolve to a task (exit 4)
    #[error("{message}")]
    NotFound { message: String },

    /// Terminal setup, drawing or input failed (exit 1)
    #[error("Terminal error: {0}")]
    RenderLoop(#[from] std::io::Error),
}

impl TrainerError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigLoad { .. } | Self::DescriptionLoad { .. } => 2,
            Self::NotFound { .. } => 4,
            Self::ConfigSave { .. } | Self::RenderLoop(_) => 1,
        }
    }

    pub fn suggest(&self) -> Option<String> {
        match self {
            Self::ConfigLoad { path, .. } => Some(format!(
                "fix or remove {} and run `git-trainer init`",
                path.display()
            )),
            Self::NotFound { .. } => Some("git-trainer list".to_string()),
            _ => None,
        }
    }
}

/// Failure of an external process launched for an action.
///
/// A child that exits non-zero and a child that never started are both
/// reported here; callers treat them the same way.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// `stderr` is only filled in for detached runs
    #[error("`{command}` exited with code {exit_code}{}", stderr_tail(.stderr))]
    Exited {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("`{command}` could not be started: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Lines of child stderr kept in the error message.
const STDERR_TAIL_LINES: usize = 5;

fn stderr_tail(stderr: &str) -> String {
    if stderr.trim().is_empty() {
        return String::new();
    }
    let lines: Vec<&str> = stderr.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    format!("\n{}", lines[start..].join("\n"))
}

/// Conventional shell status for "command could not be executed".
const SPAWN_FAILURE_CODE: i32 = 127;

impl ProcessError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exited { exit_code, .. } => *exit_code,
            Self::Spawn { .. } => SPAWN_FAILURE_CODE,
        }
    }
}
