//! Error types for reelquote.

use thiserror::Error;

/// Message shown when a submission is rejected for being blank.
pub const VALIDATION_MESSAGE: &str = "Please describe your project.";

/// Message shown for every service failure, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Sorry, I couldn't generate a quote right now. Please try again later or contact me directly.";

/// Input rejected before any request is made.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The description is empty or whitespace only.
    #[error("Please describe your project.")]
    EmptyDescription,
}

impl ValidationError {
    /// Returns the message to show next to the input.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyDescription => VALIDATION_MESSAGE,
        }
    }
}

/// Reasons a submission did not end in an outcome of its own.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The description failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A request is already in flight. Nothing was sent.
    #[error("An estimate is already being generated")]
    Busy,

    /// The request was abandoned before its response arrived.
    ///
    /// The response was discarded and the current state belongs to
    /// whatever happened after the abandon.
    #[error("The estimate request was abandoned")]
    Abandoned,
}

/// Failures of the external estimation service.
///
/// These are logged for diagnostics and never shown to the user; every
/// variant collapses to [`FAILURE_MESSAGE`].
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service could not be reached (connect, TLS, timeout, body read).
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with a non-success status.
    #[error("Service rejected the request ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Error detail reported by the service.
        message: String,
    },

    /// The service answered without any generated text.
    #[error("Service returned no content")]
    EmptyResponse,

    /// The service refused to generate content for the prompt.
    #[error("Prompt blocked by the service: {reason}")]
    Blocked {
        /// Block reason reported by the service.
        reason: String,
    },

    /// The generated text is not a valid estimate payload.
    #[error("Malformed estimate payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ServiceError {
    /// Returns the message to show the user for this failure.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }
}
