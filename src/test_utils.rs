use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ProcessError, TrainerError};
use crate::model::{ActionRequest, Task};
use crate::tui::data::DataProvider;
use crate::util::shell::format_command;
use crate::util::ProcessRunner;

/// Runner that records every invocation instead of spawning anything.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Rc<RefCell<Vec<(String, Vec<String>)>>>,
    detached: Rc<RefCell<Vec<String>>>,
    failing: Option<(String, i32)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every run of `program` exits with `exit_code`.
    pub fn failing(program: &str, exit_code: i32) -> Self {
        Self {
            failing: Some((program.to_string(), exit_code)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }

    /// Programs that were run through `run_captured`.
    pub fn detached(&self) -> Vec<String> {
        self.detached.borrow().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &str, args: &[String]) -> Result<(), ProcessError> {
        self.calls
            .borrow_mut()
            .push((command.to_string(), args.to_vec()));
        match &self.failing {
            Some((program, exit_code)) if program == command => Err(ProcessError::Exited {
                command: format_command(command, args),
                exit_code: *exit_code,
                stderr: String::new(),
            }),
            _ => Ok(()),
        }
    }

    fn run_captured(&self, command: &str, args: &[String]) -> Result<(), ProcessError> {
        self.detached.borrow_mut().push(command.to_string());
        self.run(command, args)
    }
}

/// In-memory provider: tasks live in a vector, actions are recorded.
#[derive(Default)]
pub struct MemoryProvider {
    pub tasks: RefCell<Vec<Task>>,
    pub executed: RefCell<Vec<ActionRequest>>,
    pub saves: RefCell<usize>,
    pub fail_with: Option<i32>,
    pub fail_saves: bool,
}

impl MemoryProvider {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RefCell::new(tasks),
            ..Self::default()
        }
    }
}

impl DataProvider for MemoryProvider {
    fn load_tasks(&self) -> Result<Vec<Task>, TrainerError> {
        Ok(self.tasks.borrow().clone())
    }

    fn save_tasks(&self, tasks: &[Task]) -> Result<(), TrainerError> {
        if self.fail_saves {
            return Err(TrainerError::ConfigSave {
                path: "config.json".into(),
                message: "read-only file system".to_string(),
            });
        }
        *self.saves.borrow_mut() += 1;
        *self.tasks.borrow_mut() = tasks.to_vec();
        Ok(())
    }

    fn execute(&self, request: &ActionRequest) -> Result<(), ProcessError> {
        self.executed.borrow_mut().push(*request);
        match self.fail_with {
            Some(exit_code) => Err(ProcessError::Exited {
                command: format!("./run.sh {}", request.task_id()),
                exit_code,
                stderr: String::new(),
            }),
            None => Ok(()),
        }
    }
}
