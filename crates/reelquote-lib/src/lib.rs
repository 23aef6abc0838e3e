//! AI-assisted project estimates for animation and video work.
//!
//! This is a facade crate that re-exports functionality from the reelquote
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use reelquote_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::new(ClientConfig::new(std::env::var("GEMINI_API_KEY")?))?;
//!     let session = EstimateSession::new(client);
//!
//!     if let RequestState::Succeeded(quote) = session.submit("A 30-second explainer video").await? {
//!         print!("{}", TextFormatter::new().render(&quote)?);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use reelquote_types::*;

// Re-export the request flow
pub use reelquote_estimate::{
    EstimateFlow, EstimateSession, EstimationService, EstimatorProfile, GenerationRequest,
    PROMPT_PREFIX, Submission, Ticket, build_prompt, parse_quote,
};

// Re-export the Gemini backend
#[cfg(feature = "gemini")]
pub use reelquote_gemini::{ClientConfig, GeminiClient, GeminiError, url};

// Re-export formatters
#[cfg(feature = "format")]
pub use reelquote_format::{
    DISCLAIMER, FormatError, Formatter, JsonFormatter, MarkdownFormatter, OutputFormat,
    TextFormatter,
};

/// Prelude module for convenient imports.
///
/// ```
/// use reelquote_lib::prelude::*;
/// ```
pub mod prelude {
    pub use reelquote_types::{
        BreakdownItem, ProjectDescription, Quote, RequestState, Schema, ServiceError,
        SubmitError, ValidationError,
    };

    pub use reelquote_estimate::{
        EstimateSession, EstimationService, EstimatorProfile, GenerationRequest,
    };

    #[cfg(feature = "gemini")]
    pub use reelquote_gemini::{ClientConfig, GeminiClient};

    #[cfg(feature = "format")]
    pub use reelquote_format::{
        Formatter, JsonFormatter, MarkdownFormatter, OutputFormat, TextFormatter,
    };
}
