use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{ActionKind, Task};

use super::layout::centered_rect;
use super::style::Theme;

/// Button order matches the confirm cursor: 0 is yes
const BUTTONS: [&str; 2] = ["Yes", "No"];

pub fn render(
    frame: &mut Frame,
    area: Rect,
    task: &Task,
    action: ActionKind,
    confirm_cursor: usize,
) {
    let popup_area = centered_rect(60, 60, area);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}: ", action.label()), Theme::dimmed()),
            Span::styled(task.title.as_str(), Theme::highlight()),
        ]),
        Line::from(""),
    ];
    lines.extend(
        task.description
            .iter()
            .map(|line| Line::from(Span::raw(line.as_str()))),
    );
    lines.push(Line::from(""));
    let mut buttons = Vec::new();
    for (i, label) in BUTTONS.iter().enumerate() {
        if i > 0 {
            buttons.push(Span::raw("   "));
        }
        let style = if i == confirm_cursor {
            Theme::button_active()
        } else {
            Theme::help_desc()
        };
        buttons.push(Span::styled(format!(" {} ", label), style));
    }
    lines.push(Line::from(buttons));

    let block = Block::default()
        .title(" Confirm your choice ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}
