use tracing::info;

use crate::error::{ProcessError, TrainerError};
use crate::model::{ActionKind, ActionRequest, CommandProfiles, ConfigStore, Settings, Task};
use crate::util::{InteractiveRunner, ProcessRunner};

use super::provider::DataProvider;

/// Live data provider backed by the JSON config and real scripts
pub struct LiveDataProvider {
    store: ConfigStore,
    profiles: CommandProfiles,
    runner: Box<dyn ProcessRunner>,
    /// Detach actions that keep the menu on screen from the terminal
    detach_inline: bool,
}

impl LiveDataProvider {
    pub fn new(settings: &Settings) -> Self {
        Self::with_runner(
            ConfigStore::new(&settings.config_path),
            settings.profiles.clone(),
            Box::new(InteractiveRunner::new()),
        )
    }

    /// Provider for one-shot commands run outside the menu. Every script
    /// gets the terminal and the screen is left as is around it.
    pub fn for_cli(settings: &Settings) -> Self {
        Self {
            detach_inline: false,
            ..Self::with_runner(
                ConfigStore::new(&settings.config_path),
                settings.profiles.clone(),
                Box::new(InteractiveRunner::without_clear()),
            )
        }
    }

    pub fn with_runner(
        store: ConfigStore,
        profiles: CommandProfiles,
        runner: Box<dyn ProcessRunner>,
    ) -> Self {
        Self {
            store,
            profiles,
            runner,
            detach_inline: true,
        }
    }

    fn run_script(&self, script: &str, request: &ActionRequest) -> Result<(), ProcessError> {
        let args = [request.task_id().to_string()];
        if self.detach_inline && !request.action.suspends_ui() {
            // The menu still owns the terminal (raw mode, alternate screen)
            self.runner.run_captured(script, &args)
        } else {
            self.runner.run(script, &args)
        }
    }
}

impl DataProvider for LiveDataProvider {
    fn load_tasks(&self) -> Result<Vec<Task>, TrainerError> {
        self.store.load_or_init()
    }

    fn save_tasks(&self, tasks: &[Task]) -> Result<(), TrainerError> {
        self.store.save(tasks)
    }

    fn execute(&self, request: &ActionRequest) -> Result<(), ProcessError> {
        info!(action = ?request.action, task = request.task_id(), "executing action");
        match request.action {
            ActionKind::Enter => self.run_script(&self.profiles.run_script, request),
            ActionKind::Restart => {
                self.run_script(&self.profiles.reset_script, request)?;
                self.run_script(&self.profiles.run_script, request)
            }
            ActionKind::Send => self.run_script(&self.profiles.send_script, request),
            ActionKind::Attempts | ActionKind::Continue => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingRunner;

    fn provider(runner: RecordingRunner) -> (LiveDataProvider, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("config.json"));
        let provider =
            LiveDataProvider::with_runner(store, CommandProfiles::default(), Box::new(runner));
        (provider, dir)
    }

    #[test]
    fn test_enter_passes_task_id() {
        let runner = RecordingRunner::new();
        let (provider, _dir) = provider(runner.clone());

        provider
            .execute(&ActionRequest::new(ActionKind::Enter, 1))
            .unwrap();
        assert_eq!(runner.calls(), vec![("./run.sh".to_string(), vec!["2".to_string()])]);
    }

    #[test]
    fn test_restart_resets_then_enters() {
        let runner = RecordingRunner::new();
        let (provider, _dir) = provider(runner.clone());

        provider
            .execute(&ActionRequest::new(ActionKind::Restart, 0))
            .unwrap();
        let programs: Vec<String> = runner.calls().into_iter().map(|(cmd, _)| cmd).collect();
        assert_eq!(programs, vec!["./reset.sh", "./run.sh"]);
    }

    #[test]
    fn test_failed_reset_skips_enter() {
        let runner = RecordingRunner::failing("./reset.sh", 3);
        let (provider, _dir) = provider(runner.clone());

        let err = provider
            .execute(&ActionRequest::new(ActionKind::Restart, 0))
            .unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn test_send_and_continue() {
        let runner = RecordingRunner::new();
        let (provider, _dir) = provider(runner.clone());

        provider
            .execute(&ActionRequest::new(ActionKind::Send, 0))
            .unwrap();
        provider
            .execute(&ActionRequest::new(ActionKind::Continue, 0))
            .unwrap();
        assert_eq!(runner.calls(), vec![("./send.sh".to_string(), vec!["1".to_string()])]);
    }

    #[test]
    fn test_send_runs_detached_in_menu() {
        let runner = RecordingRunner::new();
        let (provider, _dir) = provider(runner.clone());

        provider
            .execute(&ActionRequest::new(ActionKind::Send, 0))
            .unwrap();
        provider
            .execute(&ActionRequest::new(ActionKind::Enter, 0))
            .unwrap();
        assert_eq!(runner.detached(), vec!["./send.sh"]);
    }

    #[test]
    fn test_send_keeps_terminal_outside_menu() {
        let runner = RecordingRunner::new();
        let (provider, _dir) = provider(runner.clone());
        let provider = LiveDataProvider {
            detach_inline: false,
            ..provider
        };

        provider
            .execute(&ActionRequest::new(ActionKind::Send, 0))
            .unwrap();
        assert!(runner.detached().is_empty());
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn test_load_tasks_materializes_defaults() {
        let (provider, dir) = provider(RecordingRunner::new());
        let tasks = provider.load_tasks().unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(dir.path().join("config.json").exists());
    }
}
