use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ActionKind;

/// One submitted attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub timestamp: DateTime<Utc>,
}

/// Progress of a task, derived from its counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    NotInProgress,
    InProgress,
    /// At least one attempt sent, waiting for review
    Pending,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotInProgress => write!(f, "Not In Progress"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

/// A single training exercise plus its per-learner progress counters.
///
/// Identity is the position in the task list: `index` is 0-based,
/// the id handed to scripts is `index + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub entered_before: bool,
    #[serde(default)]
    pub attempts_sent: u32,
    /// Oldest first. Configs written before history was kept have none.
    #[serde(default)]
    pub attempts: Vec<Attempt>,
}

impl Task {
    pub fn new(title: impl Into<String>, description: &[&str]) -> Self {
        Self {
            title: title.into(),
            description: description.iter().map(|line| line.to_string()).collect(),
            entered_before: false,
            attempts_sent: 0,
            attempts: Vec::new(),
        }
    }

    /// Record a successful action against this task.
    pub fn record(&mut self, action: ActionKind) {
        self.record_at(action, Utc::now());
    }

    pub fn record_at(&mut self, action: ActionKind, at: DateTime<Utc>) {
        match action {
            ActionKind::Enter | ActionKind::Restart => self.entered_before = true,
            ActionKind::Send => {
                self.attempts_sent += 1;
                self.attempts.push(Attempt { timestamp: at });
            }
            ActionKind::Attempts | ActionKind::Continue => {}
        }
    }

    pub fn status(&self) -> TaskStatus {
        if self.attempts_sent > 0 || !self.attempts.is_empty() {
            TaskStatus::Pending
        } else if self.entered_before {
            TaskStatus::InProgress
        } else {
            TaskStatus::NotInProgress
        }
    }
}

/// External 1-based identifier for a 0-based task index.
pub fn task_id(index: usize) -> usize {
    index + 1
}

/// The exercise set written when no config exists yet.
pub fn default_tasks() -> Vec<Task> {
    vec![
        Task::new(
            "Hello World",
            &[
                "In this task you will create a new Git repository",
                "and make the first commit in it",
            ],
        ),
        Task::new(
            "Keep Ours",
            &[
                "The last commit in this task introduced a critical bug",
                "Fix the bug without creating a new commit",
            ],
        ),
    ]
}

/// Resolve a task from a 1-based id or an exact title.
pub fn resolve_task(tasks: &[Task], id_or_title: &str) -> Option<usize> {
    if let Ok(id) = id_or_title.parse::<usize>() {
        return (id >= 1 && id <= tasks.len()).then(|| id - 1);
    }
    tasks.iter().position(|task| task.title == id_or_title)
}
