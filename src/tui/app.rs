use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};

use super::data::{DataProvider, LiveDataProvider};
use super::event::handle_key_event;
use super::state::{reduce, AppState, StatusMessage, Transition};
use super::view;
use crate::error::{ProcessError, TrainerError};
use crate::model::{ActionRequest, Settings, TaskDescription};

const TICK_RATE: Duration = Duration::from_millis(250);

type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub fn run(settings: &Settings) -> Result<(), TrainerError> {
    let provider = LiveDataProvider::new(settings);
    let tasks = provider.load_tasks()?;
    let description = TaskDescription::load_optional(&settings.description_path)?;
    info!(tasks = tasks.len(), shape = ?settings.shape, "starting menu");

    let state = AppState::new(tasks, settings.shape).with_description(description);
    run_with_provider(state, &provider)
}

pub fn run_with_provider(state: AppState, provider: &dyn DataProvider) -> Result<(), TrainerError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, state, provider);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Term,
    mut state: AppState,
    provider: &dyn DataProvider,
) -> Result<(), TrainerError> {
    loop {
        terminal.draw(|f| view::render(f, &state))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if let Some(nav_event) = handle_key_event(key, &state) {
                    state = match reduce(state, nav_event) {
                        Transition::Stay(next) => next,
                        Transition::Dispatch { request, resume } => {
                            dispatch(terminal, resume, request, provider)?
                        }
                    };
                }
            }
        }

        if state.should_quit {
            info!("quit requested");
            break;
        }

        state = state.clear_expired_status();
    }

    Ok(())
}

/// Run an action's commands, handing the terminal over when the child
/// needs it, then settle the outcome into the resumed state.
fn dispatch(
    terminal: &mut Term,
    resume: AppState,
    request: ActionRequest,
    provider: &dyn DataProvider,
) -> Result<AppState, TrainerError> {
    let outcome = if request.action.suspends_ui() {
        suspend(terminal)?;
        let outcome = provider.execute(&request);
        restore(terminal)?;
        outcome
    } else {
        // Detached from the terminal, the menu stays drawn
        provider.execute(&request)
    };

    Ok(settle_dispatch(resume, &request, outcome, provider))
}

fn suspend(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn restore(terminal: &mut Term) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(terminal.backend_mut(), EnterAlternateScreen)?;
    terminal.hide_cursor()?;
    terminal.clear()
}

/// Apply a finished action to the state.
///
/// Success records the counter and persists it; a save failure only warns.
/// Failure leaves counters alone and resumes at the task list.
pub(crate) fn settle_dispatch(
    mut state: AppState,
    request: &ActionRequest,
    outcome: Result<(), ProcessError>,
    provider: &dyn DataProvider,
) -> AppState {
    match outcome {
        Ok(()) => {
            if let Some(task) = state.tasks.get_mut(request.task_index) {
                task.record(request.action);
            }
            info!(action = ?request.action, task = request.task_id(), "action finished");
            match provider.save_tasks(&state.tasks) {
                Ok(()) => state.set_status(StatusMessage::info(request.action.done_text())),
                Err(e) => {
                    warn!(error = %e, "progress not saved");
                    state.set_status(StatusMessage::error(format!("Progress not saved: {e}")))
                }
            }
        }
        Err(e) => {
            error!(action = ?request.action, task = request.task_id(), error = %e, "action failed");
            state
                .reset_navigation()
                .set_status(StatusMessage::error(format!("{} failed", request.action.label())))
                .show_error(format!("{} failed", request.action.label()), e.to_string())
        }
    }
}
