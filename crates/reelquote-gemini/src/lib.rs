//! Gemini client for the reelquote project estimator.
//!
//! This crate provides the generation backend:
//!
//! - [`url::generate_content_url`] - Builds `generateContent` endpoint URLs
//! - [`GeminiClient`] - HTTP client implementing [`EstimationService`](reelquote_estimate::EstimationService)
//! - [`ClientConfig`] - API key, model, endpoint and transport settings

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod url;
mod wire;

pub use client::{ClientConfig, GeminiClient, GeminiError};
