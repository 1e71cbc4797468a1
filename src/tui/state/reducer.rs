use super::{AppState, ConfirmChoice, MenuMode, ModalState, NavigationState};
use crate::model::{ActionKind, ActionRequest, MenuShape};
use crate::tui::event::NavEvent;

/// Action a two-level menu runs when a task is selected.
const PRIMARY_ACTION: ActionKind = ActionKind::Enter;

/// Result of feeding one event to the state machine.
#[derive(Debug)]
pub enum Transition {
    /// Keep going with the new state
    Stay(AppState),
    /// Hand control to the process layer, then continue from `resume`
    Dispatch {
        request: ActionRequest,
        resume: AppState,
    },
}

impl Transition {
    /// The state the loop continues with, ignoring any dispatch.
    #[allow(dead_code)] // Used in tests
    pub fn into_state(self) -> AppState {
        match self {
            Self::Stay(state) => state,
            Self::Dispatch { resume, .. } => resume,
        }
    }
}

/// Pure transition function: one event in, one transition out.
pub fn reduce(state: AppState, event: NavEvent) -> Transition {
    match event {
        NavEvent::Quit => Transition::Stay(AppState {
            should_quit: true,
            ..state
        }),

        NavEvent::ShowHelp => Transition::Stay(AppState {
            modal: Some(ModalState::Help),
            ..state
        }),

        NavEvent::HideModal => Transition::Stay(AppState {
            modal: None,
            ..state
        }),

        _ => {
            let mode = state.nav.mode;
            match mode {
                MenuMode::Browsing => browse(state, event),
                MenuMode::ActionSelect => pick_action(state, event),
                MenuMode::Confirming => confirm(state, event),
                MenuMode::Attempts => browse_attempts(state, event),
            }
        }
    }
}

fn browse(state: AppState, event: NavEvent) -> Transition {
    let nav = state.nav;
    let shape = state.shape;
    match event {
        NavEvent::MoveUp => with_nav(state, nav.task_up()),
        NavEvent::MoveDown => {
            let count = state.tasks.len();
            with_nav(state, nav.task_down(count))
        }
        NavEvent::Select if state.selected_task().is_some() => match shape {
            MenuShape::ThreeLevel => with_nav(state, nav.open_actions()),
            MenuShape::TwoLevel => choose(state, PRIMARY_ACTION),
        },
        _ => Transition::Stay(state),
    }
}

fn pick_action(state: AppState, event: NavEvent) -> Transition {
    let nav = state.nav;
    match event {
        NavEvent::MoveUp => with_nav(state, nav.action_up()),
        NavEvent::MoveDown => with_nav(state, nav.action_down()),
        NavEvent::Select => match nav.highlighted_action() {
            Some(action) => choose(state, action),
            None => Transition::Stay(state),
        },
        NavEvent::Back => with_nav(state, nav.close_menus()),
        _ => Transition::Stay(state),
    }
}

fn confirm(state: AppState, event: NavEvent) -> Transition {
    let nav = state.nav;
    match event {
        NavEvent::MoveLeft | NavEvent::MoveRight => with_nav(state, nav.toggle_confirm()),
        NavEvent::Select => match (nav.confirm, nav.highlighted_action()) {
            (ConfirmChoice::Yes, Some(action)) => {
                let request = ActionRequest::new(action, nav.task_cursor);
                perform(request, state.reset_navigation())
            }
            (ConfirmChoice::Yes, None) => Transition::Stay(state.reset_navigation()),
            (ConfirmChoice::No, _) => cancel_confirm(state),
        },
        NavEvent::Back => cancel_confirm(state),
        _ => Transition::Stay(state),
    }
}

fn browse_attempts(state: AppState, event: NavEvent) -> Transition {
    let nav = state.nav;
    match event {
        NavEvent::MoveUp => with_nav(state, nav.attempt_up()),
        NavEvent::MoveDown => {
            let count = state.selected_task().map_or(0, |task| task.attempts.len());
            with_nav(state, nav.attempt_down(count))
        }
        NavEvent::Select | NavEvent::Back => with_nav(state, nav.close_attempts()),
        _ => Transition::Stay(state),
    }
}

/// Run `action` right away, or open the gate if it is consequential.
fn choose(state: AppState, action: ActionKind) -> Transition {
    if action.needs_confirmation() {
        let nav = state.nav.open_confirm(action);
        with_nav(state, nav)
    } else {
        let request = ActionRequest::new(action, state.nav.task_cursor);
        perform(request, state)
    }
}

fn perform(request: ActionRequest, resume: AppState) -> Transition {
    if request.action.runs_process() {
        return Transition::Dispatch { request, resume };
    }
    let nav = match request.action {
        ActionKind::Attempts => resume.nav.open_attempts(),
        _ => resume.nav.close_menus(),
    };
    with_nav(resume, nav)
}

/// Leave the gate without running anything.
fn cancel_confirm(state: AppState) -> Transition {
    let shape = state.shape;
    let nav = match shape {
        MenuShape::ThreeLevel => state.nav.close_confirm(),
        MenuShape::TwoLevel => state.nav.close_menus(),
    };
    with_nav(state, nav)
}

fn with_nav(state: AppState, nav: NavigationState) -> Transition {
    Transition::Stay(AppState { nav, ..state })
}
