use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::model::{ActionKind, Task};
use crate::tui::state::{MenuMode, NavigationState};

use super::layout::centered_rect;
use super::style::Theme;

pub fn render(frame: &mut Frame, area: Rect, task: &Task, nav: &NavigationState) {
    let popup_area = centered_rect(50, 50, area);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", task.title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(if nav.mode == MenuMode::ActionSelect {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).split(inner);

    let items: Vec<ListItem> = ActionKind::ALL
        .iter()
        .map(|action| {
            let suffix = if action.needs_confirmation() { " ..." } else { "" };
            ListItem::new(Line::from(vec![
                Span::styled(action.label(), Theme::normal()),
                Span::styled(suffix, Theme::dimmed()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Theme::selected())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(nav.action_cursor));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    if let Some(action) = nav.highlighted_action() {
        let hint = Paragraph::new(Line::styled(action.hint(), Theme::dimmed()))
            .wrap(Wrap { trim: true });
        frame.render_widget(hint, chunks[1]);
    }
}
