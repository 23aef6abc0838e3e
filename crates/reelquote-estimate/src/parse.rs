//! Generated payload parsing.

use reelquote_types::{Quote, ServiceError};

/// Parses the generated JSON text into a [`Quote`].
///
/// Surrounding whitespace is ignored. Field values are taken as-is.
///
/// # Errors
///
/// Returns [`ServiceError::Malformed`] if the text is not JSON or does not
/// match the quote schema.
pub fn parse_quote(text: &str) -> Result<Quote, ServiceError> {
    let quote: Quote = serde_json::from_str(text.trim())?;
    if quote.is_breakdown_empty() {
        tracing::warn!("estimate has an empty service breakdown");
    }
    Ok(quote)
}
