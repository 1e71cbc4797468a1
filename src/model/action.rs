/// Operation selectable against a task.
///
/// Declaration order is display order; `ActionKind::ALL` is the table the
/// action menu iterates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Enter,
    Send,
    Restart,
    Attempts,
    Continue,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Enter,
        ActionKind::Send,
        ActionKind::Restart,
        ActionKind::Attempts,
        ActionKind::Continue,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Enter => "Enter task",
            Self::Send => "Send attempt",
            Self::Restart => "Restart task",
            Self::Attempts => "View attempts",
            Self::Continue => "Continue",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::Enter => "Open the exercise environment",
            Self::Send => "Submit the current state of the exercise",
            Self::Restart => "Start over from a clean environment, useful if you are stuck",
            Self::Attempts => "When each attempt for this task was sent",
            Self::Continue => "Back to the task list",
        }
    }

    /// Consequential actions go through the yes/no gate.
    pub fn needs_confirmation(self) -> bool {
        match self {
            Self::Enter | Self::Restart => true,
            Self::Send | Self::Attempts | Self::Continue => false,
        }
    }

    /// Whether the host must hand the terminal over to the child process.
    pub fn suspends_ui(self) -> bool {
        matches!(self, Self::Enter | Self::Restart)
    }

    /// Whether the action launches anything at all.
    pub fn runs_process(self) -> bool {
        !matches!(self, Self::Attempts | Self::Continue)
    }

    /// Past-tense verb for status messages.
    pub fn done_text(self) -> &'static str {
        match self {
            Self::Enter => "Left task",
            Self::Send => "Attempt sent",
            Self::Restart => "Task restarted",
            Self::Attempts => "Attempts shown",
            Self::Continue => "Back to tasks",
        }
    }
}

/// An action bound to a concrete task, ready to hand to the process layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRequest {
    pub action: ActionKind,
    /// 0-based position in the task list
    pub task_index: usize,
}

impl ActionRequest {
    pub fn new(action: ActionKind, task_index: usize) -> Self {
        Self { action, task_index }
    }

    /// 1-based id passed to the scripts.
    pub fn task_id(&self) -> usize {
        super::task_id(self.task_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id() {
        let request = ActionRequest::new(ActionKind::Enter, 1);
        assert_eq!(request.task_id(), 2);
    }

    #[test]
    fn test_table_order_matches_index() {
        for (i, kind) in ActionKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(ActionKind::from_index(i), Some(*kind));
        }
        assert_eq!(ActionKind::from_index(ActionKind::ALL.len()), None);
    }

    #[test]
    fn test_confirmation_flags() {
        assert!(ActionKind::Enter.needs_confirmation());
        assert!(ActionKind::Restart.needs_confirmation());
        assert!(!ActionKind::Send.needs_confirmation());
        assert!(!ActionKind::Continue.needs_confirmation());
    }

    #[test]
    fn test_continue_runs_nothing() {
        assert!(!ActionKind::Continue.runs_process());
        assert!(!ActionKind::Continue.suspends_ui());
        assert!(ActionKind::Send.runs_process());
        assert!(!ActionKind::Send.suspends_ui());
    }

    #[test]
    fn test_attempts_is_a_view() {
        assert!(!ActionKind::Attempts.runs_process());
        assert!(!ActionKind::Attempts.needs_confirmation());
        assert_eq!(ActionKind::ALL.last(), Some(&ActionKind::Continue));
    }
}
