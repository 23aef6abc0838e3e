//! Gemini endpoint URL construction.

/// Base URL of the Generative Language API.
pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Builds the `generateContent` URL for a model.
///
/// URL format: `{base_url}/models/{model}:generateContent`
///
/// A trailing slash on `base_url` and a `models/` prefix on `model` are both
/// accepted.
///
/// # Example
///
/// ```
/// use reelquote_gemini::url::{BASE_URL, generate_content_url};
///
/// let url = generate_content_url(BASE_URL, "gemini-2.5-flash");
/// assert_eq!(
///     url,
///     "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
/// );
/// ```
#[must_use]
pub fn generate_content_url(base_url: &str, model: &str) -> String {
    let model = model.strip_prefix("models/").unwrap_or(model);
    format!(
        "{}/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    )
}
