use anyhow::Result;

use crate::model::Settings;
use crate::tui;

/// Open the interactive task menu
pub fn run(settings: &Settings) -> Result<()> {
    tui::app::run(settings)?;
    Ok(())
}
