mod cli;
mod cmd;
mod error;
mod logging;
mod model;
#[cfg(test)]
mod test_utils;
mod tui;
mod util;

use clap::Parser;
use error::{ProcessError, TrainerError};
use model::Settings;

fn main() {
    let cli = cli::Cli::parse();
    let settings = Settings::from_args(&cli.global);

    if let Err(e) = logging::init_logging(cli.global.log_file.as_deref()) {
        eprintln!("Warning: {e:#}");
    }

    match cmd::dispatch(cli.command, &settings) {
        Ok(()) => {}
        Err(e) => {
            if let Some(te) = e.downcast_ref::<TrainerError>() {
                eprintln!("Error: {te}");
                if let Some(suggest) = te.suggest() {
                    eprintln!("  try: {suggest}");
                }
                std::process::exit(te.exit_code());
            } else if let Some(pe) = e.downcast_ref::<ProcessError>() {
                eprintln!("Error: {pe}");
                std::process::exit(pe.exit_code());
            } else {
                eprintln!("Error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}
