use std::io;
use std::process::{Command, ExitStatus, Stdio};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use tracing::{debug, info, warn};

use crate::error::ProcessError;

/// Synchronous launcher for external commands.
pub trait ProcessRunner {
    /// Run `command` with `args` to completion, attached to the terminal.
    fn run(&self, command: &str, args: &[String]) -> Result<(), ProcessError>;

    /// Run `command` detached from the terminal: no stdin, stdout dropped,
    /// stderr collected into the error on failure.
    fn run_captured(&self, command: &str, args: &[String]) -> Result<(), ProcessError>;
}

/// Runs commands with the caller's stdin/stdout/stderr so the child can be
/// interactive (a shell inside a container, for example).
#[derive(Debug, Clone)]
pub struct InteractiveRunner {
    clear_screen: bool,
}

impl InteractiveRunner {
    pub fn new() -> Self {
        Self { clear_screen: true }
    }

    /// Runner that leaves the screen alone around the child.
    pub fn without_clear() -> Self {
        Self {
            clear_screen: false,
        }
    }
}

impl Default for InteractiveRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for InteractiveRunner {
    fn run(&self, command: &str, args: &[String]) -> Result<(), ProcessError> {
        let command_line = format_command(command, args);
        info!(command = %command_line, "launching");

        if self.clear_screen {
            clear_terminal();
        }

        let status = Command::new(command)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        if self.clear_screen {
            clear_terminal();
        }

        let status = status.map_err(|source| spawn_error(&command_line, source))?;
        check_status(command_line, status, String::new())
    }

    fn run_captured(&self, command: &str, args: &[String]) -> Result<(), ProcessError> {
        let command_line = format_command(command, args);
        info!(command = %command_line, "launching detached");

        let output = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| spawn_error(&command_line, source))?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
        if !stderr.is_empty() {
            debug!(command = %command_line, %stderr, "child stderr");
        }
        check_status(command_line, output.status, stderr)
    }
}

fn spawn_error(command_line: &str, source: io::Error) -> ProcessError {
    warn!(command = %command_line, error = %source, "failed to start");
    ProcessError::Spawn {
        command: command_line.to_string(),
        source,
    }
}

fn check_status(
    command_line: String,
    status: ExitStatus,
    stderr: String,
) -> Result<(), ProcessError> {
    if status.success() {
        info!(command = %command_line, "finished");
        return Ok(());
    }

    // Killed by a signal: no code, report as a generic failure.
    let exit_code = status.code().unwrap_or(-1);
    warn!(command = %command_line, exit_code, "exited with failure");
    Err(ProcessError::Exited {
        command: command_line,
        exit_code,
        stderr,
    })
}

/// Human-readable command line for logs and status messages.
pub fn format_command(command: &str, args: &[String]) -> String {
    if args.is_empty() {
        command.to_string()
    } else {
        format!("{} {}", command, args.join(" "))
    }
}

fn clear_terminal() {
    if let Err(e) = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)) {
        warn!(error = %e, "failed to clear terminal");
    }
}
