//! Process configuration
//!
//! Read once from the environment (after `.env` is loaded) and never mutated.
//! A missing `OPENAI_API_KEY` is not an error here: the server still starts
//! and plan requests fail with a configuration error instead.

use std::env;
use std::net::SocketAddr;

use url::Url;

use crate::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::planner::DEFAULT_MAX_OUTPUT_TOKENS;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Invalid value for {name}: {reason}")]
  InvalidValue { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub openai_api_key: Option<String>,
  pub model: String,
  pub base_url: Url,
  pub max_output_tokens: u32,
  pub bind_addr: SocketAddr,
}

impl AppConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let openai_api_key = env::var("OPENAI_API_KEY")
      .ok()
      .map(|key| key.trim().to_string())
      .filter(|key| !key.is_empty());

    let model = env::var("OPENAI_MODEL")
      .ok()
      .filter(|m| !m.trim().is_empty())
      .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let base_url = parse_var("OPENAI_BASE_URL", DEFAULT_BASE_URL, |raw| {
      Url::parse(raw).map_err(|e| e.to_string())
    })?;

    let max_output_tokens = parse_var(
      "PLANNER_MAX_OUTPUT_TOKENS",
      &DEFAULT_MAX_OUTPUT_TOKENS.to_string(),
      |raw| match raw.parse::<u32>() {
        Ok(0) => Err("must be greater than zero".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
      },
    )?;

    let bind_addr = parse_var("PLANNER_BIND_ADDR", DEFAULT_BIND_ADDR, |raw| {
      raw.parse::<SocketAddr>().map_err(|e| e.to_string())
    })?;

    Ok(Self {
      openai_api_key,
      model,
      base_url,
      max_output_tokens,
      bind_addr,
    })
  }
}

fn parse_var<T>(
  name: &'static str,
  default: &str,
  parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
  let raw = env::var(name).unwrap_or_else(|_| default.to_string());
  parse(raw.trim()).map_err(|reason| ConfigError::InvalidValue { name, reason })
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
