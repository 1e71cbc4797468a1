use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "git-trainer", about = "Pick and launch git training exercises", version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Task list (JSON); created with the default tasks if missing
    #[arg(long, global = true, env = "GIT_TRAINER_CONFIG", default_value = "config.json")]
    pub config: PathBuf,

    /// Exercise description shown above the menu (default: next to the executable)
    #[arg(long, global = true, env = "GIT_TRAINER_DESCRIPTION")]
    pub description: Option<PathBuf>,

    /// Script that opens an exercise; receives the task id
    #[arg(long, global = true, env = "GIT_TRAINER_RUN_SCRIPT", default_value = "./run.sh")]
    pub run_script: String,

    /// Script that resets an exercise environment; receives the task id
    #[arg(long, global = true, env = "GIT_TRAINER_RESET_SCRIPT", default_value = "./reset.sh")]
    pub reset_script: String,

    /// Script that submits an attempt; receives the task id
    #[arg(long, global = true, env = "GIT_TRAINER_SEND_SCRIPT", default_value = "./send.sh")]
    pub send_script: String,

    /// Skip the action menu: Enter on a task goes straight to confirmation
    #[arg(long, global = true)]
    pub two_level: bool,

    /// Log file (default: ~/.git-trainer/git-trainer.log)
    #[arg(long, global = true, env = "GIT_TRAINER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive task menu
    Menu,

    /// Write the default task config
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// List tasks with their progress
    List,

    /// Open a task without the menu
    Enter {
        /// Task id (1-based) or exact title
        task: String,
    },

    /// Send an attempt for a task
    Send {
        /// Task id (1-based) or exact title
        task: String,
    },

    /// Reset a task environment and open it again
    Restart {
        /// Task id (1-based) or exact title
        task: String,
    },
}
