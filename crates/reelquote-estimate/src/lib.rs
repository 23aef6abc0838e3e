//! Estimate request flow for the reelquote project estimator.
//!
//! This crate turns a free-text project description into a structured
//! estimate by delegating to an external generation service:
//!
//! - [`EstimatorProfile`] - Persona and rate anchors behind the system instruction
//! - [`GenerationRequest`] - Prompt, system instruction and schema for one call
//! - [`EstimationService`] - The external generation service seam
//! - [`parse_quote`] - Parses generated JSON text into a [`Quote`](reelquote_types::Quote)
//! - [`EstimateFlow`] - Request lifecycle state machine
//! - [`EstimateSession`] - Async driver tying the flow to a service

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod flow;
mod parse;
mod profile;
mod prompt;
mod service;
mod session;

#[cfg(test)]
mod test_support;

pub use flow::{EstimateFlow, Submission, Ticket};
pub use parse::parse_quote;
pub use profile::EstimatorProfile;
pub use prompt::{GenerationRequest, PROMPT_PREFIX, build_prompt};
pub use service::EstimationService;
pub use session::EstimateSession;
