pub mod action;
pub mod init;
pub mod list;
pub mod menu;

use crate::cli::Command;
use crate::model::{ActionKind, Settings};
use anyhow::Result;

pub fn dispatch(cmd: Option<Command>, settings: &Settings) -> Result<()> {
    match cmd.unwrap_or(Command::Menu) {
        Command::Menu => menu::run(settings),
        Command::Init { force } => init::run(settings, force),
        Command::List => list::run(settings),
        Command::Enter { task } => action::run(settings, ActionKind::Enter, &task),
        Command::Send { task } => action::run(settings, ActionKind::Send, &task),
        Command::Restart { task } => action::run(settings, ActionKind::Restart, &task),
    }
}
