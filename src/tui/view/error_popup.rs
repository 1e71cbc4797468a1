use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;
use super::style::Theme;

pub fn render(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let popup_area = centered_rect(60, 40, area);

    frame.render_widget(Clear, popup_area);

    let mut lines = vec![Line::from("")];
    lines.extend(
        message
            .lines()
            .map(|line| Line::styled(line, Theme::status_error())),
    );
    lines.extend([
        Line::from(""),
        Line::styled("Ask your instructor if this keeps happening.", Theme::help_desc()),
        Line::from(""),
        Line::styled("Press Enter to continue", Theme::dimmed()),
    ]);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Theme::status_error())
        .borders(Borders::ALL)
        .border_style(Theme::border_error());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}
