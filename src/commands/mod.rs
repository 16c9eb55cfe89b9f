//! HTTP commands invoked by the planner UI

pub mod plan;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::planner::Planner;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
  pub planner: Arc<Planner>,
}

pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/api/phase", get(plan::get_phase))
    .route("/api/plan", post(plan::create_plan))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
  pub status: &'static str,
  pub generation_configured: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
  Json(HealthStatus {
    status: "ok",
    generation_configured: state.planner.is_configured(),
  })
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
