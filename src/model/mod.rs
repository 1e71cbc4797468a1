pub mod action;
pub mod config;
pub mod description;
pub mod settings;
pub mod task;

pub use action::{ActionKind, ActionRequest};
pub use config::ConfigStore;
pub use description::TaskDescription;
pub use settings::{CommandProfiles, MenuShape, Settings};
pub use task::{default_tasks, resolve_task, task_id, Attempt, Task, TaskStatus};
