//! LLM integration for plan generation
//!
//! This module handles communication with the OpenAI Responses API. The
//! planner only sees the `GenerationService` trait so tests can swap in a
//! scripted generator.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone)]
pub enum LlmError {
  #[error("Invalid endpoint: {0}")]
  Endpoint(String),

  #[error("Request failed: {0}")]
  Request(String),

  #[error("API error: {0}")]
  Api(String),

  #[error("Parse error: {0}")]
  Parse(String),
}

/// ---------------------------------------------------------------------------
/// Generation Seam
/// ---------------------------------------------------------------------------

/// One structured-output generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
  pub system: String,
  pub prompt: String,
  pub schema_name: String,
  pub schema: Value,
  pub max_output_tokens: u32,
}

/// Anything that can turn a prompt + schema into a text blob
#[async_trait]
pub trait GenerationService: Send + Sync {
  /// Run exactly one generation. An absent output is returned as an empty string.
  async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError>;
}

/// ---------------------------------------------------------------------------
/// Responses API Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
  model: &'a str,
  input: Vec<InputMessage<'a>>,
  max_output_tokens: u32,
  text: TextOptions<'a>,
}

#[derive(Debug, Serialize)]
struct InputMessage<'a> {
  role: &'static str,
  content: &'a str,
}

#[derive(Debug, Serialize)]
struct TextOptions<'a> {
  format: JsonSchemaFormat<'a>,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat<'a> {
  #[serde(rename = "type")]
  format_type: &'static str,
  name: &'a str,
  strict: bool,
  schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
  #[serde(default)]
  output: Vec<OutputItem>,
  #[allow(dead_code)]
  status: Option<String>,
  usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
  #[serde(rename = "type")]
  item_type: String,
  #[serde(default)]
  content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
  #[serde(rename = "type")]
  content_type: String,
  text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
  input_tokens: u32,
  output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
  error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
  message: String,
}

impl ResponsesResponse {
  /// Concatenate every `output_text` part of every message item
  fn output_text(&self) -> String {
    self
      .output
      .iter()
      .filter(|item| item.item_type == "message")
      .flat_map(|item| item.content.iter())
      .filter(|part| part.content_type == "output_text")
      .filter_map(|part| part.text.as_deref())
      .collect()
  }
}

/// ---------------------------------------------------------------------------
/// OpenAI Client
/// ---------------------------------------------------------------------------

pub struct OpenAiClient {
  client: Client,
  api_key: String,
  model: String,
  endpoint: Url,
}

impl OpenAiClient {
  pub fn new(
    api_key: impl Into<String>,
    model: impl Into<String>,
    base_url: &Url,
  ) -> Result<Self, LlmError> {
    Ok(Self {
      client: Client::new(),
      api_key: api_key.into(),
      model: model.into(),
      endpoint: responses_endpoint(base_url)?,
    })
  }
}

/// `{base}/responses`, tolerating a base with or without a trailing slash
fn responses_endpoint(base_url: &Url) -> Result<Url, LlmError> {
  let mut base = base_url.clone();
  if !base.path().ends_with('/') {
    let path = format!("{}/", base.path());
    base.set_path(&path);
  }
  base
    .join("responses")
    .map_err(|e| LlmError::Endpoint(e.to_string()))
}

#[async_trait]
impl GenerationService for OpenAiClient {
  async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
    let body = ResponsesRequest {
      model: &self.model,
      input: vec![
        InputMessage {
          role: "system",
          content: &request.system,
        },
        InputMessage {
          role: "user",
          content: &request.prompt,
        },
      ],
      max_output_tokens: request.max_output_tokens,
      text: TextOptions {
        format: JsonSchemaFormat {
          format_type: "json_schema",
          name: &request.schema_name,
          strict: true,
          schema: &request.schema,
        },
      },
    };

    let response = self
      .client
      .post(self.endpoint.clone())
      .bearer_auth(&self.api_key)
      .json(&body)
      .send()
      .await
      .map_err(|e| LlmError::Request(e.to_string()))?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| LlmError::Request(e.to_string()))?;

    if !status.is_success() {
      if let Ok(error_resp) = serde_json::from_str::<ApiErrorResponse>(&text) {
        return Err(LlmError::Api(error_resp.error.message));
      }
      return Err(LlmError::Api(format!("HTTP {}: {}", status, text)));
    }

    let parsed: ResponsesResponse =
      serde_json::from_str(&text).map_err(|e| LlmError::Parse(e.to_string()))?;

    if let Some(usage) = &parsed.usage {
      tracing::debug!(
        model = %self.model,
        input_tokens = usage.input_tokens,
        output_tokens = usage.output_tokens,
        "generation finished"
      );
    }

    Ok(parsed.output_text())
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
