//! Core types for the reelquote project estimator.
//!
//! This crate provides the data structures shared by the estimator flow,
//! the Gemini client and the renderers:
//!
//! - [`ProjectDescription`] - Validated free-text project description
//! - [`Quote`] - Structured cost/timeline estimate
//! - [`BreakdownItem`] - One line of the service breakdown
//! - [`Schema`] - Typed response-schema descriptor
//! - [`RequestState`] - Lifecycle of one estimate request

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod description;
mod error;
mod quote;
mod schema;
mod state;

pub use description::ProjectDescription;
pub use error::{
    FAILURE_MESSAGE, ServiceError, SubmitError, VALIDATION_MESSAGE, ValidationError,
};
pub use quote::{BreakdownItem, Quote};
pub use schema::{Property, Schema, SchemaType};
pub use state::RequestState;
