//! Request lifecycle state.

use crate::Quote;

/// State of the current estimate request.
///
/// A fresh submission replaces whatever state came before it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing has been submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The service returned a valid estimate.
    Succeeded(Quote),
    /// The request failed; holds the user-facing message.
    Failed(String),
}

impl RequestState {
    /// Returns true while a request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns the estimate, if the request succeeded.
    #[must_use]
    pub const fn quote(&self) -> Option<&Quote> {
        match self {
            Self::Succeeded(quote) => Some(quote),
            _ => None,
        }
    }

    /// Returns the failure message, if the request failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the state as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

impl std::fmt::Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
