//! Prompt construction.

use reelquote_types::{ProjectDescription, Quote, Schema};
use serde::Serialize;

use crate::EstimatorProfile;

/// Text placed before the user's description in the prompt.
pub const PROMPT_PREFIX: &str = "Generate a quote for this project: ";

/// Builds the user prompt for a description.
///
/// # Example
///
/// ```
/// use reelquote_estimate::build_prompt;
/// use reelquote_types::ProjectDescription;
///
/// let desc = ProjectDescription::parse("A 30-second explainer video").unwrap();
/// assert_eq!(
///     build_prompt(&desc),
///     "Generate a quote for this project: A 30-second explainer video"
/// );
/// ```
#[must_use]
pub fn build_prompt(description: &ProjectDescription) -> String {
    format!("{PROMPT_PREFIX}{description}")
}

/// Everything the generation service receives for one estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// User prompt with the description interpolated.
    pub prompt: String,
    /// Fixed persona/domain instruction.
    pub system_instruction: String,
    /// Schema the generated JSON must follow.
    pub schema: Schema,
}

impl GenerationRequest {
    /// Creates a request from its parts.
    #[must_use]
    pub const fn new(prompt: String, system_instruction: String, schema: Schema) -> Self {
        Self {
            prompt,
            system_instruction,
            schema,
        }
    }

    /// Builds the estimate request for a description.
    #[must_use]
    pub fn for_description(description: &ProjectDescription, profile: &EstimatorProfile) -> Self {
        Self::new(
            build_prompt(description),
            profile.system_instruction(),
            Quote::response_schema(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_keeps_description_verbatim() {
        let desc = ProjectDescription::parse("  Line one\nLine two  ").unwrap();
        assert_eq!(
            build_prompt(&desc),
            "Generate a quote for this project:   Line one\nLine two  "
        );
    }

    #[test]
    fn test_request_for_description() {
        let desc = ProjectDescription::parse("Logo animation").unwrap();
        let profile = EstimatorProfile::default();
        let request = GenerationRequest::for_description(&desc, &profile);

        assert_eq!(request.prompt, "Generate a quote for this project: Logo animation");
        assert_eq!(request.system_instruction, profile.system_instruction());
        assert_eq!(request.schema, Quote::response_schema());
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let desc = ProjectDescription::parse("Logo animation").unwrap();
        let request = GenerationRequest::for_description(&desc, &EstimatorProfile::default());
        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("systemInstruction").is_some());
        assert_eq!(value["schema"]["type"], "OBJECT");
    }
}
