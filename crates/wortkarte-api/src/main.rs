//! wortkarte-api server entry point

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wortkarte_api::ApiError;
use wortkarte_api::api::AppState;
use wortkarte_api::api::run_server;
use wortkarte_api::config::Config;
use wortkarte_api::service::WordApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Initialize logging
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  // Load configuration
  let config = Config::from_env()?;
  tracing::info!(corpus_path = %config.corpus_path.display(), "configuration loaded");

  // Load the corpus once; a bad file leaves it empty instead of aborting
  let service = Arc::new(WordApiServiceFull::new(&config)?);
  tracing::info!(words = service.corpus_len(), "word service initialized");

  // Create application state
  let state = AppState::new(config, service);

  // Start server
  run_server(state).await
}
