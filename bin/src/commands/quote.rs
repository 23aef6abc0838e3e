//! Quote command implementation.
//!
//! This module handles a single estimate request and writes the result in
//! the chosen format.

use crate::commands::ask_description;
use crate::display::{Format, resolve_format, spinner, write_quote};
use crate::options::{ProfileArgs, ServiceArgs};
use anyhow::{Result, bail};
use reelquote_lib::prelude::*;
use std::path::Path;

/// Request one estimate and render it.
pub(crate) async fn quote(
    description: Option<String>,
    service: &ServiceArgs,
    profile: &ProfileArgs,
    format: Option<Format>,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let format = resolve_format(format, output);
    let description = match description {
        Some(description) => description,
        None => ask_description()?,
    };

    // Validate before touching the network or the key
    if let Err(e) = ProjectDescription::parse(description.as_str()) {
        bail!("{}", e.user_message());
    }

    let session = EstimateSession::new(service.client()?).with_profile(profile.profile());

    let progress = spinner(quiet, "Generating estimate...")?;
    let result = session.submit(&description).await;
    progress.finish_and_clear();

    match result? {
        RequestState::Succeeded(quote) => {
            write_quote(&quote, format, output)?;
            if let Some(path) = output
                && !quiet
            {
                eprintln!("Estimate written to {} ({format})", path.display());
            }
            Ok(())
        }
        RequestState::Failed(message) => bail!("{message}"),
        state => bail!("Estimate did not settle (state: {state})"),
    }
}
