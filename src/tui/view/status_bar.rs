use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::state::{AppState, MenuMode};

use super::style::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let left_text = left_text(state);
    let help_hint = " Press ? for help ";

    let message = state
        .status_message
        .as_ref()
        .map(|m| m.text.as_str())
        .unwrap_or("");

    let message_style = if state.status_message.as_ref().is_some_and(|m| m.is_error) {
        Theme::status_error()
    } else {
        Theme::status_message()
    };

    // Calculate spacing
    let total_width = area.width as usize;
    let padding = total_width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(help_hint.len())
        .saturating_sub(message.chars().count());

    let line = Line::from(vec![
        Span::styled(left_text, Theme::status_bar()),
        Span::styled(message, message_style),
        Span::styled(" ".repeat(padding), Theme::status_bar()),
        Span::styled(help_hint, Theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(line).style(Theme::status_bar());
    frame.render_widget(paragraph, area);
}

fn left_text(state: &AppState) -> String {
    let title = state
        .selected_task()
        .map(|t| t.title.as_str())
        .unwrap_or("");

    match state.nav.mode {
        MenuMode::Browsing => format!(" {} tasks ", state.tasks.len()),
        MenuMode::ActionSelect => format!(" Task: {} ", title),
        MenuMode::Confirming => {
            let action = state
                .nav
                .highlighted_action()
                .map(|a| a.label())
                .unwrap_or("");
            format!(" {}: {} ", action, title)
        }
        MenuMode::Attempts => format!(" Attempts: {} ", title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{default_tasks, ActionKind, MenuShape};

    #[test]
    fn test_left_text_follows_mode() {
        let mut state = AppState::new(default_tasks(), MenuShape::ThreeLevel);
        assert_eq!(left_text(&state), " 2 tasks ");

        state.nav = state.nav.task_down(2).open_actions();
        assert_eq!(left_text(&state), " Task: Keep Ours ");

        state.nav = state.nav.open_confirm(ActionKind::Restart);
        assert_eq!(left_text(&state), " Restart task: Keep Ours ");

        state.nav = state.nav.close_confirm().open_attempts();
        assert_eq!(left_text(&state), " Attempts: Keep Ours ");
    }
}
