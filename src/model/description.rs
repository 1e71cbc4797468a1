use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::TrainerError;

/// Static exercise text shipped next to the executable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskDescription {
    #[serde(default = "default_title", alias = "Title")]
    pub title: String,
    #[serde(default)]
    pub description: Vec<String>,
}

fn default_title() -> String {
    "Task description:".to_string()
}

impl TaskDescription {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TrainerError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| TrainerError::DescriptionLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| TrainerError::DescriptionLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Like `load`, but a missing file is not an error.
    pub fn load_optional<P: AsRef<Path>>(path: P) -> Result<Option<Self>, TrainerError> {
        let path = path.as_ref();
        match fs::metadata(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no description file");
                Ok(None)
            }
            _ => Self::load(path).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("description.json");
        fs::write(
            &path,
            r#"{"Title": "Keep Ours", "description": ["Fix the bug", "without a new commit"]}"#,
        )
        .unwrap();

        let desc = TaskDescription::load(&path).unwrap();
        assert_eq!(desc.title, "Keep Ours");
        assert_eq!(desc.description, vec!["Fix the bug", "without a new commit"]);
    }

    #[test]
    fn test_default_title() {
        let desc: TaskDescription = serde_json::from_str(r#"{"description": ["x"]}"#).unwrap();
        assert_eq!(desc.title, "Task description:");
    }

    #[test]
    fn test_optional_missing_and_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("description.json");
        assert_eq!(TaskDescription::load_optional(&path).unwrap(), None);

        fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(
            TaskDescription::load_optional(&path),
            Err(TrainerError::DescriptionLoad { .. })
        ));
    }
}
