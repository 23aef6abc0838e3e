//! CLI command implementations.

pub(crate) mod interactive;
pub(crate) mod prompt;
pub(crate) mod quote;
pub(crate) mod schema;

use anyhow::{Context, Result};

/// Ask for a project description on the terminal.
pub(crate) fn ask_description() -> Result<String> {
    inquire::Text::new("Describe your project:")
        .with_help_message("e.g. A 30-second explainer video for a mobile app")
        .prompt()
        .context("Failed to read project description")
}
