//! Project description input.

use derive_more::{Display, Into};
use serde::Serialize;

use crate::ValidationError;

/// A free-text description of a creative project.
///
/// Holds at least one non-whitespace character. The text is kept exactly as
/// typed; only validation looks at the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Into, Serialize)]
#[serde(transparent)]
pub struct ProjectDescription(String);

impl ProjectDescription {
    /// Validates and wraps a description.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyDescription`] if the input is empty or
    /// contains only whitespace.
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        let text = input.into();
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(Self(text))
    }

    /// Returns the description text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the description in characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for ProjectDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ProjectDescription {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
