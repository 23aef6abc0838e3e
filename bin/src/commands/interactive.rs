//! Interactive command implementation.
//!
//! One session serves every submission, so the last estimate stays on
//! screen until the next one replaces it.

use crate::display::{Format, show_state, spinner};
use crate::options::{ProfileArgs, ServiceArgs};
use anyhow::{Context, Result};
use inquire::InquireError;
use reelquote_lib::prelude::*;

/// Run an interactive estimate session.
///
/// Ctrl-C while a request is pending abandons it. Esc or Ctrl-C at the
/// prompt ends the session.
pub(crate) async fn interactive(
    service: &ServiceArgs,
    profile: &ProfileArgs,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let session = EstimateSession::new(service.client()?).with_profile(profile.profile());

    if !quiet {
        println!(
            "Describe a project to get an estimate (model: {}). Esc to quit.",
            session.service().model_name()
        );
    }

    loop {
        let input = match inquire::Text::new("Describe your project:").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read project description"),
        };

        let progress = spinner(quiet, "Generating estimate...")?;
        let result = tokio::select! {
            result = session.submit(&input) => Some(result),
            _ = tokio::signal::ctrl_c() => None,
        };
        progress.finish_and_clear();

        match result {
            Some(Ok(state)) => show_state(&state, format.into())?,
            Some(Err(SubmitError::Invalid(_))) => {
                if let Some(notice) = session.notice().await {
                    eprintln!("{notice}");
                }
            }
            Some(Err(SubmitError::Busy)) => eprintln!("A request is already in progress."),
            Some(Err(SubmitError::Abandoned)) => eprintln!("Request abandoned."),
            None => {
                session.abandon().await;
                eprintln!("Request abandoned.");
            }
        }
    }

    Ok(())
}
