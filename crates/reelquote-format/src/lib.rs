//! Output renderers for the reelquote project estimator.
//!
//! This crate provides formatters for writing a [`Quote`](reelquote_types::Quote)
//! in several shapes:
//!
//! - [`TextFormatter`] - Plain-text estimate card
//! - [`JsonFormatter`] - JSON matching the response schema
//! - [`MarkdownFormatter`] - Markdown with a breakdown table

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod formatter;
mod json;
mod markdown;
mod text;

pub use formatter::{DISCLAIMER, FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
