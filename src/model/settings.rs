use std::path::PathBuf;

use crate::cli::GlobalArgs;

/// Menu depth. Confirmation stays a per-action flag in both shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuShape {
    /// list -> action menu -> confirm
    #[default]
    ThreeLevel,
    /// list -> confirm for the primary action
    TwoLevel,
}

/// Commands run for each action; the task id is appended as the last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandProfiles {
    pub run_script: String,
    pub reset_script: String,
    pub send_script: String,
}

impl Default for CommandProfiles {
    fn default() -> Self {
        Self {
            run_script: "./run.sh".to_string(),
            reset_script: "./reset.sh".to_string(),
            send_script: "./send.sh".to_string(),
        }
    }
}

/// Resolved runtime settings, fixed for the whole run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub description_path: PathBuf,
    pub profiles: CommandProfiles,
    pub shape: MenuShape,
}

impl Settings {
    pub fn from_args(args: &GlobalArgs) -> Self {
        Self {
            config_path: args.config.clone(),
            description_path: args
                .description
                .clone()
                .unwrap_or_else(default_description_path),
            profiles: CommandProfiles {
                run_script: args.run_script.clone(),
                reset_script: args.reset_script.clone(),
                send_script: args.send_script.clone(),
            },
            shape: if args.two_level {
                MenuShape::TwoLevel
            } else {
                MenuShape::ThreeLevel
            },
        }
    }
}

/// `description.json` in the directory holding the executable.
fn default_description_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("description.json")))
        .unwrap_or_else(|| PathBuf::from("description.json"))
}
