use ratatui::style::{Color, Modifier, Style};

use crate::model::{Task, TaskStatus};

/// Color scheme for the TUI
pub struct Theme;

impl Theme {
    // General styles
    pub fn title() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default()
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    pub fn status_message() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn help_key() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn help_desc() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button_active() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }
}

/// Progress marker for a task row
pub fn progress_marker(task: &Task) -> (String, Style) {
    let status = task.status();
    let text = match status {
        TaskStatus::Pending => format!("sent x{}", task.attempts_sent),
        TaskStatus::InProgress => "started".to_string(),
        TaskStatus::NotInProgress => "new".to_string(),
    };
    (text, status_style(status))
}

pub fn status_style(status: TaskStatus) -> Style {
    match status {
        TaskStatus::Pending => Style::default().fg(Color::Green),
        TaskStatus::InProgress => Style::default().fg(Color::Yellow),
        TaskStatus::NotInProgress => Style::default().fg(Color::Gray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_marker() {
        let mut task = Task::new("Hello World", &[]);
        assert_eq!(progress_marker(&task).0, "new");

        task.entered_before = true;
        assert_eq!(progress_marker(&task).0, "started");

        task.attempts_sent = 2;
        assert_eq!(progress_marker(&task).0, "sent x2");
    }
}
