//! Plan request handler
//!
//! Orchestrates one plan request: precondition checks, a single call to the
//! generation service, and defensive parsing of whatever comes back.

use std::sync::Arc;

use crate::error::PlanError;
use crate::llm::{GenerationRequest, GenerationService};
use crate::models::{Plan, UserContext};
use crate::parse::{parse_plan, ParseFailure};
use crate::prompt::{build_prompt, check_prompt_length, system_instruction};
use crate::schema::{plan_schema, SCHEMA_NAME};

/// Output token budget when none is configured
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 900;

pub struct Planner {
  /// `None` when no credential was configured at startup
  generator: Option<Arc<dyn GenerationService>>,
  max_output_tokens: u32,
}

impl Planner {
  pub fn new(generator: Option<Arc<dyn GenerationService>>, max_output_tokens: u32) -> Self {
    Self {
      generator,
      max_output_tokens,
    }
  }

  pub fn is_configured(&self) -> bool {
    self.generator.is_some()
  }

  /// Assemble the full generation request for a context
  pub fn build_request(&self, ctx: &UserContext) -> GenerationRequest {
    GenerationRequest {
      system: system_instruction(),
      prompt: build_prompt(ctx),
      schema_name: SCHEMA_NAME.to_string(),
      schema: plan_schema(),
      max_output_tokens: self.max_output_tokens,
    }
  }

  pub async fn generate_plan(&self, ctx: &UserContext) -> Result<Plan, PlanError> {
    let generator = self.generator.as_ref().ok_or(PlanError::Configuration)?;

    let request = self.build_request(ctx);
    check_prompt_length(&request.prompt)?;

    tracing::info!(
      cycle_day = ctx.cycle_day,
      phase = %ctx.phase(),
      prompt_chars = request.prompt.chars().count(),
      "requesting plan"
    );

    let text = generator.generate(&request).await.map_err(|e| {
      tracing::error!(error = ?e, "plan generation call failed");
      PlanError::ServiceInvocation(e.to_string())
    })?;

    parse_plan(&text).map_err(|failure| {
      match failure {
        ParseFailure::Empty => tracing::error!("model returned no output"),
        ParseFailure::InvalidJson => tracing::error!(raw = %text, "model returned invalid JSON"),
      }
      PlanError::from(failure)
    })
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
