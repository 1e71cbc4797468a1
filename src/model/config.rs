use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::task::{default_tasks, Task};
use crate::error::TrainerError;

/// JSON-backed task list.
///
/// On disk the list is an object keyed by the 0-based index as a string:
/// `{"0": {"title": .., "description": [..], "enteredBefore": .., "attemptsSent": ..,
/// "attempts": [{"timestamp": ..}]}}`.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the task list, failing if the file is missing or corrupt.
    pub fn load(&self) -> Result<Vec<Task>, TrainerError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.load_error(e))?;
        parse_tasks(&content).map_err(|message| TrainerError::ConfigLoad {
            path: self.path.clone(),
            message,
        })
    }

    /// Load the task list, writing the default set first if no file exists.
    ///
    /// A corrupt file is an error and is left untouched.
    pub fn load_or_init(&self) -> Result<Vec<Task>, TrainerError> {
        if !self.exists() {
            warn!(path = %self.path.display(), "config missing, writing defaults");
            let tasks = default_tasks();
            self.save(&tasks)?;
            return Ok(tasks);
        }
        self.load()
    }

    /// Persist the task list. Written to a sibling file first, then renamed
    /// over the target so a crash never leaves a half-written config.
    pub fn save(&self, tasks: &[Task]) -> Result<(), TrainerError> {
        let json = render_tasks(tasks).map_err(|e| self.save_error(e.to_string()))?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.save_error(e.to_string()))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.save_error(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.save_error(e.to_string()))?;

        info!(path = %self.path.display(), tasks = tasks.len(), "config saved");
        Ok(())
    }

    fn load_error(&self, e: std::io::Error) -> TrainerError {
        TrainerError::ConfigLoad {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }

    fn save_error(&self, message: String) -> TrainerError {
        TrainerError::ConfigSave {
            path: self.path.clone(),
            message,
        }
    }
}

/// Parse the index-keyed JSON object into an ordered task list.
pub fn parse_tasks(content: &str) -> Result<Vec<Task>, String> {
    let map: BTreeMap<usize, Task> =
        serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}"))?;

    if map.is_empty() {
        return Err("config contains no tasks".to_string());
    }

    // Keys must be exactly 0..n so that positions stay stable ids.
    for (expected, key) in map.keys().enumerate() {
        if *key != expected {
            return Err(format!("task index {expected} is missing (found {key})"));
        }
    }

    Ok(map.into_values().collect())
}

pub fn render_tasks(tasks: &[Task]) -> serde_json::Result<String> {
    let map: BTreeMap<usize, &Task> = tasks.iter().enumerate().collect();
    serde_json::to_string_pretty(&map)
}
