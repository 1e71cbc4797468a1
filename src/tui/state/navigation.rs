use crate::model::ActionKind;

/// Which menu level currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuMode {
    /// Only the task list is visible
    #[default]
    Browsing,
    /// Action menu open over the highlighted task
    ActionSelect,
    /// Yes/no gate over the highlighted action
    Confirming,
    /// Attempt history of the highlighted task, opened from the action menu
    Attempts,
}

/// Cursor of the yes/no gate. `Yes` is index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
    #[default]
    Yes,
    No,
}

impl ConfirmChoice {
    pub fn toggle(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Yes => 0,
            Self::No => 1,
        }
    }
}

/// Cursor positions and open menus.
///
/// The mode enum makes "confirm open implies action menu open" hold by
/// construction; the flag accessors expose it in that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub task_cursor: usize,
    pub action_cursor: usize,
    /// Row in the attempt history, 0 is the newest
    pub attempt_cursor: usize,
    pub confirm: ConfirmChoice,
    pub mode: MenuMode,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_menu_open(&self) -> bool {
        self.mode != MenuMode::Browsing
    }

    pub fn confirm_menu_open(&self) -> bool {
        self.mode == MenuMode::Confirming
    }

    pub fn confirm_cursor(&self) -> usize {
        self.confirm.index()
    }

    /// Action under the action cursor.
    pub fn highlighted_action(&self) -> Option<ActionKind> {
        ActionKind::from_index(self.action_cursor)
    }

    pub fn task_up(self) -> Self {
        Self {
            task_cursor: self.task_cursor.saturating_sub(1),
            ..self
        }
    }

    pub fn task_down(self, task_count: usize) -> Self {
        Self {
            task_cursor: step_down(self.task_cursor, task_count),
            ..self
        }
    }

    pub fn action_up(self) -> Self {
        Self {
            action_cursor: self.action_cursor.saturating_sub(1),
            ..self
        }
    }

    pub fn action_down(self) -> Self {
        Self {
            action_cursor: step_down(self.action_cursor, ActionKind::ALL.len()),
            ..self
        }
    }

    pub fn open_actions(self) -> Self {
        Self {
            mode: MenuMode::ActionSelect,
            action_cursor: 0,
            ..self
        }
    }

    /// Open the gate for `action`; the action cursor marks what is pending.
    pub fn open_confirm(self, action: ActionKind) -> Self {
        Self {
            mode: MenuMode::Confirming,
            action_cursor: action.index(),
            confirm: ConfirmChoice::Yes,
            ..self
        }
    }

    pub fn toggle_confirm(self) -> Self {
        Self {
            confirm: self.confirm.toggle(),
            ..self
        }
    }

    pub fn open_attempts(self) -> Self {
        Self {
            mode: MenuMode::Attempts,
            action_cursor: ActionKind::Attempts.index(),
            attempt_cursor: 0,
            ..self
        }
    }

    pub fn attempt_up(self) -> Self {
        Self {
            attempt_cursor: self.attempt_cursor.saturating_sub(1),
            ..self
        }
    }

    pub fn attempt_down(self, attempt_count: usize) -> Self {
        Self {
            attempt_cursor: step_down(self.attempt_cursor, attempt_count),
            ..self
        }
    }

    /// Back to the action menu, still on "View attempts".
    pub fn close_attempts(self) -> Self {
        Self {
            mode: MenuMode::ActionSelect,
            attempt_cursor: 0,
            ..self
        }
    }

    /// Close the gate, keeping the action menu where it was.
    pub fn close_confirm(self) -> Self {
        Self {
            mode: MenuMode::ActionSelect,
            confirm: ConfirmChoice::Yes,
            ..self
        }
    }

    /// Close every menu but keep the highlighted task.
    pub fn close_menus(self) -> Self {
        Self {
            task_cursor: self.task_cursor,
            ..Self::default()
        }
    }
}

/// Clamped increment; never wraps and never leaves `0..len`.
fn step_down(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (cursor + 1).min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_browsing() {
        let nav = NavigationState::new();
        assert_eq!(nav.mode, MenuMode::Browsing);
        assert_eq!(nav.task_cursor, 0);
        assert_eq!(nav.confirm_cursor(), 0);
        assert!(!nav.action_menu_open());
        assert!(!nav.confirm_menu_open());
    }

    #[test]
    fn test_task_cursor_clamped() {
        let nav = NavigationState::new();
        let nav = nav.task_up();
        assert_eq!(nav.task_cursor, 0);

        let nav = nav.task_down(3).task_down(3).task_down(3);
        assert_eq!(nav.task_cursor, 2);

        // Empty list keeps the cursor at 0
        assert_eq!(NavigationState::new().task_down(0).task_cursor, 0);
    }

    #[test]
    fn test_up_down_roundtrip() {
        let len = 5;
        for start in 1..len - 1 {
            let nav = NavigationState {
                task_cursor: start,
                ..NavigationState::new()
            };
            assert_eq!(nav.task_up().task_down(len).task_cursor, start);
            assert_eq!(nav.task_down(len).task_up().task_cursor, start);
        }
    }

    #[test]
    fn test_action_cursor_clamped() {
        let mut nav = NavigationState::new().open_actions();
        for _ in 0..10 {
            nav = nav.action_down();
        }
        assert_eq!(nav.action_cursor, ActionKind::ALL.len() - 1);
        assert_eq!(nav.highlighted_action(), Some(ActionKind::Continue));
    }

    #[test]
    fn test_attempt_cursor_clamped() {
        let nav = NavigationState::new().open_actions().open_attempts();
        assert_eq!(nav.mode, MenuMode::Attempts);
        assert!(nav.action_menu_open());
        assert!(!nav.confirm_menu_open());

        let nav = nav.attempt_up();
        assert_eq!(nav.attempt_cursor, 0);
        let nav = nav.attempt_down(2).attempt_down(2).attempt_down(2);
        assert_eq!(nav.attempt_cursor, 1);
        assert_eq!(NavigationState::new().attempt_down(0).attempt_cursor, 0);

        let nav = nav.close_attempts();
        assert_eq!(nav.mode, MenuMode::ActionSelect);
        assert_eq!(nav.highlighted_action(), Some(ActionKind::Attempts));
        assert_eq!(nav.attempt_cursor, 0);
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(ConfirmChoice::Yes.toggle().toggle(), ConfirmChoice::Yes);
        assert_eq!(ConfirmChoice::No.toggle().toggle(), ConfirmChoice::No);
        assert_eq!(ConfirmChoice::No.index(), 1);
    }

    #[test]
    fn test_confirm_implies_action_menu() {
        let nav = NavigationState::new().open_confirm(ActionKind::Restart);
        assert!(nav.confirm_menu_open());
        assert!(nav.action_menu_open());
        assert_eq!(nav.highlighted_action(), Some(ActionKind::Restart));

        let nav = nav.toggle_confirm().close_confirm();
        assert_eq!(nav.mode, MenuMode::ActionSelect);
        assert_eq!(nav.confirm, ConfirmChoice::Yes);
        assert_eq!(nav.action_cursor, ActionKind::Restart.index());
    }

    #[test]
    fn test_close_menus_keeps_task() {
        let nav = NavigationState::new().task_down(3).open_confirm(ActionKind::Enter);
        let nav = nav.close_menus();
        assert_eq!(nav.task_cursor, 1);
        assert_eq!(nav.mode, MenuMode::Browsing);
        assert_eq!(nav.action_cursor, 0);
    }
}
