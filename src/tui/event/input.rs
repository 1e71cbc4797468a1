use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::NavEvent;
use crate::tui::state::AppState;

/// Convert a key event to a navigation event based on current state
pub fn handle_key_event(key: KeyEvent, state: &AppState) -> Option<NavEvent> {
    // Press only: release and repeat events would replay actions
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C quits from anywhere, modal or not
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(NavEvent::Quit);
    }

    if state.modal.is_some() {
        return handle_modal_key(key);
    }

    match key.code {
        KeyCode::Char('q') => Some(NavEvent::Quit),
        KeyCode::Esc => Some(NavEvent::Back),

        KeyCode::Char('k') | KeyCode::Up => Some(NavEvent::MoveUp),
        KeyCode::Char('j') | KeyCode::Down => Some(NavEvent::MoveDown),
        KeyCode::Char('h') | KeyCode::Left => Some(NavEvent::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(NavEvent::MoveRight),

        KeyCode::Enter => Some(NavEvent::Select),

        KeyCode::Char('?') => Some(NavEvent::ShowHelp),

        _ => None,
    }
}

fn handle_modal_key(key: KeyEvent) -> Option<NavEvent> {
    match key.code {
        KeyCode::Char('q') => Some(NavEvent::Quit),
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => Some(NavEvent::HideModal),
        _ => None,
    }
}
