use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::state::MenuMode;

use super::layout::centered_rect;
use super::style::Theme;

pub fn render(frame: &mut Frame, area: Rect, mode: MenuMode) {
    let popup_area = centered_rect(60, 70, area);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let title = match mode {
        MenuMode::Browsing => " Help - Tasks ",
        MenuMode::ActionSelect => " Help - Actions ",
        MenuMode::Confirming => " Help - Confirm ",
        MenuMode::Attempts => " Help - Attempts ",
    };

    let lines: Vec<Line> = help_items(mode)
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", key), Theme::help_key()),
                Span::styled(*desc, Theme::help_desc()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}

fn help_items(mode: MenuMode) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![("q/Ctrl+C", "Quit"), ("?", "Toggle help")];

    match mode {
        MenuMode::Browsing => {
            items.extend([
                ("k/Up", "Move up"),
                ("j/Down", "Move down"),
                ("Enter", "Open task"),
            ]);
        }
        MenuMode::ActionSelect => {
            items.extend([
                ("k/Up", "Previous action"),
                ("j/Down", "Next action"),
                ("Enter", "Run action (... asks first)"),
                ("Esc", "Back to tasks"),
            ]);
        }
        MenuMode::Confirming => {
            items.extend([
                ("h/Left", "Switch Yes/No"),
                ("l/Right", "Switch Yes/No"),
                ("Enter", "Confirm choice"),
                ("Esc", "Cancel"),
            ]);
        }
        MenuMode::Attempts => {
            items.extend([
                ("k/Up", "Newer attempt"),
                ("j/Down", "Older attempt"),
                ("Esc/Enter", "Back to actions"),
            ]);
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_items_per_mode() {
        let browsing = help_items(MenuMode::Browsing);
        assert!(browsing.iter().any(|(_, desc)| *desc == "Open task"));

        let confirming = help_items(MenuMode::Confirming);
        assert!(confirming.iter().any(|(key, _)| *key == "h/Left"));
        assert!(!confirming.iter().any(|(_, desc)| *desc == "Open task"));

        let attempts = help_items(MenuMode::Attempts);
        assert!(attempts.iter().any(|(_, desc)| *desc == "Back to actions"));
    }
}
