//! Output format abstraction.

use reelquote_types::Quote;
use std::io::Write;
use thiserror::Error;

/// Note printed under a rendered estimate.
pub const DISCLAIMER: &str = "*This is an AI-generated estimate and is not a final quote. Prices may vary based on project details.";

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Plain-text card.
    #[default]
    Text,
    /// JSON object.
    Json,
    /// Markdown document.
    Markdown,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Markdown => "markdown",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for estimate renderers.
pub trait Formatter: Send + Sync {
    /// Writes the estimate to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_quote<W: Write>(&self, quote: &Quote, writer: W) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;

    /// Renders the estimate into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&self, quote: &Quote) -> Result<String, FormatError> {
        let mut buffer = Vec::new();
        self.write_quote(quote, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
