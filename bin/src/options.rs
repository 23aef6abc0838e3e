//! Arguments shared between commands.

use anyhow::{Context, Result};
use clap::Args;
use reelquote_lib::prelude::*;
use reelquote_lib::url::{BASE_URL, DEFAULT_MODEL};
use std::time::Duration;

/// Fallback variable for the API key.
const FALLBACK_KEY_VAR: &str = "API_KEY";

/// Options for reaching the generation service.
#[derive(Args, Debug)]
pub(crate) struct ServiceArgs {
    /// Gemini API key (falls back to the API_KEY environment variable)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// API base URL
    #[arg(long, default_value = BASE_URL)]
    base_url: String,

    /// Request timeout in seconds (no limit by default)
    #[arg(long)]
    timeout: Option<u64>,

    /// Sampling temperature
    #[arg(long)]
    temperature: Option<f32>,
}

impl ServiceArgs {
    /// Builds the client configuration from flags and environment.
    pub(crate) fn client_config(&self) -> Result<ClientConfig> {
        let api_key = resolve_api_key(
            self.api_key.as_deref(),
            std::env::var(FALLBACK_KEY_VAR).ok().as_deref(),
        )?;

        Ok(ClientConfig::new(api_key)
            .with_model(&self.model)
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout.map(Duration::from_secs))
            .with_temperature(self.temperature))
    }

    /// Creates the Gemini client.
    pub(crate) fn client(&self) -> Result<GeminiClient> {
        let config = self.client_config()?;
        tracing::debug!(?config, "creating Gemini client");
        GeminiClient::new(config).context("Failed to create Gemini client")
    }
}

/// Picks the first non-blank key: the flag or `GEMINI_API_KEY`, then `API_KEY`.
fn resolve_api_key(primary: Option<&str>, fallback: Option<&str>) -> Result<String> {
    primary
        .into_iter()
        .chain(fallback)
        .find(|key| !key.trim().is_empty())
        .map(str::to_string)
        .context("No API key: pass --api-key or set GEMINI_API_KEY")
}

/// Overrides for the estimator persona.
#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// Hourly rate in USD the estimate is anchored on
    #[arg(long)]
    rate: Option<u32>,
}

impl ProfileArgs {
    /// Returns the estimator profile with overrides applied.
    pub(crate) fn profile(&self) -> EstimatorProfile {
        self.rate.map_or_else(EstimatorProfile::default, |rate| {
            EstimatorProfile::default().with_hourly_rate(rate)
        })
    }
}
