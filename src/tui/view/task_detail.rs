use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{Task, TaskDescription};

use super::style::{progress_marker, Theme};

/// Detail panel for the highlighted task
pub fn render(frame: &mut Frame, area: Rect, task: Option<&Task>) {
    let block = Block::default()
        .title(" Task ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let Some(task) = task else {
        let paragraph = Paragraph::new(Line::styled("No tasks configured", Theme::dimmed()))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let (marker, marker_style) = progress_marker(task);
    let mut lines = vec![
        Line::from(Span::styled(task.title.as_str(), Theme::highlight())),
        Line::from(""),
    ];
    lines.extend(
        task.description
            .iter()
            .map(|line| Line::from(Span::raw(line.as_str()))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Status: ", Theme::dimmed()),
        Span::styled(task.status().to_string(), marker_style),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Progress: ", Theme::dimmed()),
        Span::styled(marker, marker_style),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Attempts sent: ", Theme::dimmed()),
        Span::raw(task.attempts_sent.to_string()),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Height the description header needs, borders included
pub fn info_height(description: &TaskDescription) -> u16 {
    let lines = description.description.len().clamp(1, 6);
    u16::try_from(lines).unwrap_or(6) + 2
}

/// Exercise description loaded at startup
pub fn render_info(frame: &mut Frame, area: Rect, description: &TaskDescription) {
    let lines: Vec<Line> = description
        .description
        .iter()
        .take(6)
        .map(|line| Line::from(Span::raw(line.as_str())))
        .collect();

    let block = Block::default()
        .title(format!(" {} ", description.title))
        .title_style(Theme::dimmed())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
