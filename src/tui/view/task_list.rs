use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::task_id;
use crate::tui::state::AppState;

use super::style::{progress_marker, Theme};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let title_width = usize::from(area.width).saturating_sub(18).max(8);

    let items: Vec<ListItem> = state
        .tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let (marker, marker_style) = progress_marker(task);
            let line = Line::from(vec![
                Span::styled(format!("{:>2}. ", task_id(index)), Theme::dimmed()),
                Span::styled(
                    format!("{:<width$}", truncate(&task.title, title_width), width = title_width),
                    Theme::normal(),
                ),
                Span::raw(" "),
                Span::styled(marker, marker_style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let border = if state.nav.action_menu_open() {
        Theme::border()
    } else {
        Theme::border_focused()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Choose a task ")
                .title_style(Theme::title())
                .borders(Borders::ALL)
                .border_style(border),
        )
        .highlight_style(Theme::selected())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.tasks.is_empty() {
        list_state.select(Some(state.nav.task_cursor));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", kept)
    }
}
