//! Error taxonomy for plan generation
//!
//! Every failure a plan request can hit is one of these variants. The HTTP
//! layer maps them onto status codes and the `{error, details?}` body.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
  /// No generation credential configured
  #[error("Missing OPENAI_API_KEY")]
  Configuration,

  #[error("Input too long: prompt is {length} characters, limit is {max}")]
  InputTooLong { length: usize, max: usize },

  /// The generation call itself failed; carries the underlying message
  #[error("Failed to generate plan: {0}")]
  ServiceInvocation(String),

  #[error("No model output")]
  EmptyOutput,

  #[error("Model returned invalid JSON")]
  MalformedOutput,
}

impl PlanError {
  /// True when the caller can fix the request themselves
  pub fn is_client_error(&self) -> bool {
    matches!(self, PlanError::InputTooLong { .. })
  }

  pub fn to_body(&self) -> ErrorBody {
    match self {
      PlanError::Configuration => ErrorBody::new("Missing OPENAI_API_KEY"),
      PlanError::InputTooLong { length, max } => ErrorBody::new("Input too long")
        .with_details(format!("prompt is {} characters, limit is {}", length, max)),
      PlanError::ServiceInvocation(message) => {
        ErrorBody::new("Failed to generate plan").with_details(message.clone())
      }
      PlanError::EmptyOutput => ErrorBody::new("No model output"),
      PlanError::MalformedOutput => ErrorBody::new("Model returned invalid JSON"),
    }
  }
}

/// Uniform error payload returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
  pub error: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<String>,
}

impl ErrorBody {
  pub fn new(error: impl Into<String>) -> Self {
    Self {
      error: error.into(),
      details: None,
    }
  }

  pub fn with_details(mut self, details: impl Into<String>) -> Self {
    self.details = Some(details.into());
    self
  }
}
