use anyhow::Result;

use crate::model::{task_id, ConfigStore, Settings, Task};

/// Print tasks with their progress
pub fn run(settings: &Settings) -> Result<()> {
    let tasks = ConfigStore::new(&settings.config_path).load_or_init()?;
    print!("{}", render_table(&tasks));
    Ok(())
}

fn render_table(tasks: &[Task]) -> String {
    let mut out = format!(
        "{:<4} {:<30} {:<8} {:<6} {}\n",
        "ID", "TITLE", "ENTERED", "SENT", "STATUS"
    );
    out.push_str(&"-".repeat(68));
    out.push('\n');

    for (index, task) in tasks.iter().enumerate() {
        let entered = if task.entered_before { "yes" } else { "no" };
        out.push_str(&format!(
            "{:<4} {:<30} {:<8} {:<6} {}\n",
            task_id(index),
            task.title,
            entered,
            task.attempts_sent,
            task.status()
        ));
    }
    out
}
