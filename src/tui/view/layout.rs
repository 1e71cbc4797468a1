use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    Frame,
};

use crate::model::MenuShape;
use crate::tui::state::{AppState, MenuMode, ModalState};

use super::{
    action_menu, attempts_popup, confirm_popup, error_popup, help_popup, status_bar, task_detail,
    task_list,
};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: optional description header + content area + status bar
    let header_height = state
        .description
        .as_ref()
        .map(task_detail::info_height)
        .unwrap_or(0);
    let chunks = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    if let Some(description) = &state.description {
        task_detail::render_info(frame, chunks[0], description);
    }

    let content = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);
    task_list::render(frame, content[0], state);
    task_detail::render(frame, content[1], state.selected_task());

    status_bar::render(frame, chunks[2], state);

    render_menus(frame, chunks[1], state);

    // Render modal on top if present
    if let Some(modal) = &state.modal {
        match modal {
            ModalState::Help => help_popup::render(frame, area, state.nav.mode),
            ModalState::Error { title, message } => {
                error_popup::render(frame, area, title, message)
            }
        }
    }
}

fn render_menus(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(task) = state.selected_task() else {
        return;
    };

    if state.nav.action_menu_open() && state.shape == MenuShape::ThreeLevel {
        action_menu::render(frame, area, task, &state.nav);
    }

    if state.nav.mode == MenuMode::Confirming {
        if let Some(action) = state.nav.highlighted_action() {
            confirm_popup::render(frame, area, task, action, state.nav.confirm_cursor());
        }
    }

    if state.nav.mode == MenuMode::Attempts {
        attempts_popup::render(frame, area, task, state.nav.attempt_cursor);
    }
}

/// Rect of `percent_x` by `percent_y` centered inside `area`
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}
