use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::{ErrorBody, PlanError};
use crate::models::{Plan, UserContext};
use crate::phase::CyclePhase;

/// ---------------------------------------------------------------------------
/// Error Mapping
/// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ApiError {
  /// Request could not be decoded or failed boundary validation
  BadRequest { error: &'static str, details: String },
  Plan(PlanError),
}

impl From<PlanError> for ApiError {
  fn from(e: PlanError) -> Self {
    ApiError::Plan(e)
  }
}

const INVALID_BODY: &str = "Invalid request body";
const INVALID_QUERY: &str = "Invalid query";

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest {
      error: INVALID_BODY,
      details: rejection.body_text(),
    }
  }
}

impl From<QueryRejection> for ApiError {
  fn from(rejection: QueryRejection) -> Self {
    ApiError::BadRequest {
      error: INVALID_QUERY,
      details: rejection.body_text(),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match self {
      ApiError::BadRequest { error, details } => (
        StatusCode::BAD_REQUEST,
        ErrorBody::new(error).with_details(details),
      ),
      ApiError::Plan(e) => {
        let status = if e.is_client_error() {
          StatusCode::BAD_REQUEST
        } else {
          StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, e.to_body())
      }
    };

    (status, Json(body)).into_response()
  }
}

fn require_positive_day(cycle_day: u32, error: &'static str) -> Result<(), ApiError> {
  if cycle_day == 0 {
    return Err(ApiError::BadRequest {
      error,
      details: "cycleDay must be at least 1".to_string(),
    });
  }
  Ok(())
}

/// ---------------------------------------------------------------------------
/// Plan Generation
/// ---------------------------------------------------------------------------

fn wants_plain_text(headers: &HeaderMap) -> bool {
  headers
    .get(ACCEPT)
    .and_then(|value| value.to_str().ok())
    .is_some_and(|accept| accept.contains("text/plain"))
}

/// POST /api/plan
///
/// Replies with the plan as JSON, or as the copy/paste text export when the
/// client sends `Accept: text/plain`.
pub async fn create_plan(
  State(state): State<AppState>,
  headers: HeaderMap,
  payload: Result<Json<UserContext>, JsonRejection>,
) -> Result<Response, ApiError> {
  let Json(ctx) = payload?;
  require_positive_day(ctx.cycle_day, INVALID_BODY)?;

  let plan: Plan = state.planner.generate_plan(&ctx).await?;
  if wants_plain_text(&headers) {
    return Ok(
      (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        plan.to_plain_text(),
      )
        .into_response(),
    );
  }
  Ok(Json(plan).into_response())
}

/// ---------------------------------------------------------------------------
/// Phase Hint
/// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseQuery {
  pub cycle_day: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseResponse {
  pub cycle_day: u32,
  pub phase: CyclePhase,
}

/// GET /api/phase?cycleDay=N
pub async fn get_phase(
  query: Result<Query<PhaseQuery>, QueryRejection>,
) -> Result<Json<PhaseResponse>, ApiError> {
  let Query(PhaseQuery { cycle_day }) = query?;
  require_positive_day(cycle_day, INVALID_QUERY)?;

  Ok(Json(PhaseResponse {
    cycle_day,
    phase: CyclePhase::from_cycle_day(cycle_day),
  }))
}
