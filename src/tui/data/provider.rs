use crate::error::{ProcessError, TrainerError};
use crate::model::{ActionRequest, Task};

/// Trait for loading tasks and executing actions
/// This allows mocking for tests
pub trait DataProvider {
    /// Load all tasks, materializing defaults when nothing is stored yet
    fn load_tasks(&self) -> Result<Vec<Task>, TrainerError>;

    /// Persist tasks with their counters
    fn save_tasks(&self, tasks: &[Task]) -> Result<(), TrainerError>;

    /// Run the external commands behind an action, blocking until done
    fn execute(&self, request: &ActionRequest) -> Result<(), ProcessError>;
}
