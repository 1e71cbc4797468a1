use std::time::Instant;

use super::NavigationState;
use crate::model::{MenuShape, Task, TaskDescription};

/// Modal dialog state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Help,
    Error { title: String, message: String },
}

/// Status message with expiration
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub created_at: Instant,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            created_at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() > 3
    }
}

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub tasks: Vec<Task>,
    pub nav: NavigationState,
    pub shape: MenuShape,
    pub description: Option<TaskDescription>,
    pub modal: Option<ModalState>,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, shape: MenuShape) -> Self {
        Self {
            tasks,
            nav: NavigationState::new(),
            shape,
            description: None,
            modal: None,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn with_description(self, description: Option<TaskDescription>) -> Self {
        Self {
            description,
            ..self
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.nav.task_cursor)
    }

    /// Fresh cursors at the task list, tasks and their counters untouched.
    pub fn reset_navigation(self) -> Self {
        Self {
            nav: NavigationState::new(),
            ..self
        }
    }

    pub fn set_status(self, message: StatusMessage) -> Self {
        Self {
            status_message: Some(message),
            ..self
        }
    }

    pub fn show_error(self, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            modal: Some(ModalState::Error {
                title: title.into(),
                message: message.into(),
            }),
            ..self
        }
    }

    pub fn clear_expired_status(self) -> Self {
        if self
            .status_message
            .as_ref()
            .is_some_and(StatusMessage::is_expired)
        {
            return Self {
                status_message: None,
                ..self
            };
        }
        self
    }
}
