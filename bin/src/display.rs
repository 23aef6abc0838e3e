//! Display utilities and output formatting for the reelquote CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use reelquote_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Output format for a rendered estimate.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
    Markdown,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
            Format::Markdown => Self::Markdown,
        }
    }
}

/// Resolve the output format.
///
/// An explicit `--format` wins. Otherwise the output file extension decides,
/// falling back to text.
pub(crate) fn resolve_format(format: Option<Format>, output: Option<&Path>) -> OutputFormat {
    format.map_or_else(
        || {
            output
                .and_then(Path::extension)
                .and_then(std::ffi::OsStr::to_str)
                .and_then(|ext| ext.parse().ok())
                .unwrap_or_default()
        },
        OutputFormat::from,
    )
}

/// Creates a spinner shown while a request is pending.
pub(crate) fn spinner(quiet: bool, message: &'static str) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")
            .context("Invalid spinner template")?,
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Write a quote to a file, or to stdout when no path is given.
pub(crate) fn write_quote(
    quote: &Quote,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            render_to(quote, format, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            render_to(quote, format, stdout.lock())?;
        }
    }
    Ok(())
}

fn render_to<W: Write>(quote: &Quote, format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Text => TextFormatter::new().write_quote(quote, writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_quote(quote, writer)?,
        OutputFormat::Markdown => MarkdownFormatter::new().write_quote(quote, writer)?,
    }
    Ok(())
}

/// Print a settled request state.
///
/// Failures go to stderr with the generic message only.
pub(crate) fn show_state(state: &RequestState, format: OutputFormat) -> Result<()> {
    match state {
        RequestState::Succeeded(quote) => write_quote(quote, format, None),
        RequestState::Failed(message) => {
            eprintln!("{message}");
            Ok(())
        }
        RequestState::Idle | RequestState::Pending => Ok(()),
    }
}
