pub mod commands;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod parse;
pub mod phase;
pub mod planner;
pub mod prompt;
pub mod render;
pub mod schema;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use commands::AppState;
use config::{AppConfig, ConfigError};
use llm::{GenerationService, LlmError, OpenAiClient};
use planner::Planner;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
  #[error("Configuration error: {0}")]
  Config(#[from] ConfigError),

  #[error("Generation client error: {0}")]
  Client(#[from] LlmError),

  #[error("Server error: {0}")]
  Io(#[from] std::io::Error),
}

/// Wire the planner from configuration. Without a key the planner still
/// exists but refuses plan requests.
pub fn build_planner(config: &AppConfig) -> Result<Planner, LlmError> {
  let generator: Option<Arc<dyn GenerationService>> = match &config.openai_api_key {
    Some(key) => Some(Arc::new(OpenAiClient::new(
      key.clone(),
      config.model.clone(),
      &config.base_url,
    )?)),
    None => {
      tracing::warn!("OPENAI_API_KEY is not set; plan requests will fail until it is configured");
      None
    }
  };

  Ok(Planner::new(generator, config.max_output_tokens))
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::registry()
    .with(tracing_subscriber::fmt::layer())
    .with(filter)
    .init();
}

pub async fn run() -> Result<(), StartupError> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();
  init_tracing();

  let config = AppConfig::from_env()?;
  let planner = build_planner(&config)?;

  let app = commands::router(AppState {
    planner: Arc::new(planner),
  });

  let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
  tracing::info!(addr = %config.bind_addr, model = %config.model, "cycle planner listening");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  tracing::info!("cycle planner shut down");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for shutdown signal");
  }
}
