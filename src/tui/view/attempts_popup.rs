use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::Task;

use super::layout::centered_rect;
use super::style::{status_style, Theme};

/// Attempt history of `task`, newest first
pub fn render(frame: &mut Frame, area: Rect, task: &Task, cursor: usize) {
    let popup_area = centered_rect(50, 60, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" Attempts: {} ", task.title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(inner);

    let status = task.status();
    let summary = Paragraph::new(Line::from(vec![
        Span::styled("Status: ", Theme::dimmed()),
        Span::styled(status.to_string(), status_style(status)),
        Span::styled(format!("  ({} sent)", task.attempts_sent), Theme::dimmed()),
    ]));
    frame.render_widget(summary, chunks[0]);

    if task.attempts.is_empty() {
        let empty = Paragraph::new(Line::styled("No attempts sent yet", Theme::dimmed()));
        frame.render_widget(empty, chunks[1]);
    } else {
        let total = task.attempts.len();
        let items: Vec<ListItem> = task
            .attempts
            .iter()
            .enumerate()
            .rev()
            .map(|(i, attempt)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("#{:<4}", i + 1), Theme::dimmed()),
                    Span::styled(format_timestamp(&attempt.timestamp), Theme::normal()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Theme::selected())
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(cursor.min(total - 1)));
        frame.render_stateful_widget(list, chunks[1], &mut list_state);
    }

    let footer = Paragraph::new(Line::styled("Esc/Enter: back to actions", Theme::dimmed()));
    frame.render_widget(footer, chunks[2]);
}

/// Attempt time in the learner's local zone
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%d.%m.%Y %H:%M:%S")
        .to_string()
}
