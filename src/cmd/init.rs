use anyhow::{bail, Result};
use tracing::info;

use crate::model::{default_tasks, ConfigStore, Settings};

/// Write the default task list
pub fn run(settings: &Settings, force: bool) -> Result<()> {
    let store = ConfigStore::new(&settings.config_path);
    init_config(&store, force)?;
    println!("Wrote {} default tasks to {}", default_tasks().len(), store.path().display());
    Ok(())
}

fn init_config(store: &ConfigStore, force: bool) -> Result<()> {
    if store.exists() && !force {
        bail!(
            "{} already exists. Use --force to reset it to the default tasks.",
            store.path().display()
        );
    }
    store.save(&default_tasks())?;
    info!(path = %store.path().display(), force, "config initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("config.json"));

        init_config(&store, false).unwrap();
        assert_eq!(store.load().unwrap(), default_tasks());
    }

    #[test]
    fn test_init_refuses_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("config.json"));
        let custom = vec![Task::new("Rebase", &["Rewrite history"])];
        store.save(&custom).unwrap();

        let err = init_config(&store, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(store.load().unwrap(), custom);

        init_config(&store, true).unwrap();
        assert_eq!(store.load().unwrap(), default_tasks());
    }
}
