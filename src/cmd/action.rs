use anyhow::Result;
use tracing::{info, warn};

use crate::error::TrainerError;
use crate::model::{resolve_task, ActionKind, ActionRequest, Settings, Task};
use crate::tui::data::{DataProvider, LiveDataProvider};

/// Run one action against a task without opening the menu
pub fn run(settings: &Settings, action: ActionKind, id_or_title: &str) -> Result<()> {
    let provider = LiveDataProvider::for_cli(settings);
    let task = perform(&provider, action, id_or_title)?;
    eprintln!("{}: {}", action.done_text(), task.title);
    Ok(())
}

/// Resolve the task, run the action, then record and persist progress.
///
/// A failed save is logged and reported but does not fail the command.
fn perform(provider: &dyn DataProvider, action: ActionKind, id_or_title: &str) -> Result<Task> {
    let mut tasks = provider.load_tasks()?;
    let index = resolve_task(&tasks, id_or_title).ok_or_else(|| TrainerError::NotFound {
        message: format!(
            "Task '{}' not found. Have {} tasks.",
            id_or_title,
            tasks.len()
        ),
    })?;

    let request = ActionRequest::new(action, index);
    provider.execute(&request)?;

    tasks[index].record(action);
    info!(action = ?action, task = request.task_id(), "action finished");
    if let Err(e) = provider.save_tasks(&tasks) {
        warn!(error = %e, "progress not saved");
        eprintln!("Warning: {e}");
    }

    Ok(tasks.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessError;
    use crate::model::default_tasks;
    use crate::test_utils::MemoryProvider;

    #[test]
    fn test_send_by_id() {
        let provider = MemoryProvider::new(default_tasks());
        let task = perform(&provider, ActionKind::Send, "2").unwrap();

        assert_eq!(task.title, "Keep Ours");
        assert_eq!(task.attempts_sent, 1);
        assert_eq!(
            *provider.executed.borrow(),
            vec![ActionRequest::new(ActionKind::Send, 1)]
        );
        assert_eq!(provider.tasks.borrow()[1].attempts_sent, 1);
    }

    #[test]
    fn test_enter_by_title() {
        let provider = MemoryProvider::new(default_tasks());
        let task = perform(&provider, ActionKind::Enter, "Hello World").unwrap();
        assert!(task.entered_before);
        assert!(provider.tasks.borrow()[0].entered_before);
    }

    #[test]
    fn test_unknown_task() {
        let provider = MemoryProvider::new(default_tasks());
        let err = perform(&provider, ActionKind::Enter, "3").unwrap_err();
        let err = err.downcast_ref::<TrainerError>().unwrap();
        assert_eq!(err.exit_code(), 4);
        assert!(provider.executed.borrow().is_empty());
    }

    #[test]
    fn test_failure_keeps_counters() {
        let provider = MemoryProvider {
            fail_with: Some(3),
            ..MemoryProvider::new(default_tasks())
        };
        let err = perform(&provider, ActionKind::Send, "1").unwrap_err();
        assert_eq!(err.downcast_ref::<ProcessError>().unwrap().exit_code(), 3);
        assert_eq!(provider.tasks.borrow()[0].attempts_sent, 0);
        assert_eq!(*provider.saves.borrow(), 0);
    }

    #[test]
    fn test_save_failure_still_succeeds() {
        let provider = MemoryProvider {
            fail_saves: true,
            ..MemoryProvider::new(default_tasks())
        };
        let task = perform(&provider, ActionKind::Restart, "1").unwrap();
        assert!(task.entered_before);
    }
}
