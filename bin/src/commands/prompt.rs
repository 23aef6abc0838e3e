//! Prompt command implementation.
//!
//! Builds the exact request an estimate would send and prints it without
//! calling the service.

use crate::commands::ask_description;
use crate::options::ProfileArgs;
use anyhow::{Result, anyhow};
use reelquote_lib::prelude::*;

/// Print the system instruction, prompt and schema for a description.
pub(crate) fn show_prompt(
    description: Option<String>,
    profile: &ProfileArgs,
    json: bool,
) -> Result<()> {
    let description = match description {
        Some(description) => description,
        None => ask_description()?,
    };
    let description =
        ProjectDescription::parse(description).map_err(|e| anyhow!("{}", e.user_message()))?;

    let request = GenerationRequest::for_description(&description, &profile.profile());

    if json {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    println!("SYSTEM INSTRUCTION");
    println!("{}", "-".repeat(50));
    println!("{}\n", request.system_instruction);
    println!("PROMPT");
    println!("{}", "-".repeat(50));
    println!("{}\n", request.prompt);
    println!("RESPONSE SCHEMA");
    println!("{}", "-".repeat(50));
    println!("{}", serde_json::to_string_pretty(&request.schema)?);
    Ok(())
}
