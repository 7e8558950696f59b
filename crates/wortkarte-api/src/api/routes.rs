//! Router definition

use axum::{Router, http::Method, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{get_random_words, health_check};
use super::state::AppState;
use crate::errors::ApiError;

/// Path of the random words endpoint
pub const RANDOM_WORDS_PATH: &str = "/api/words/random";

/// Creates the API router
///
/// Cross-origin requests are accepted from any origin.
///
/// # Arguments
/// * `state` - Application state
///
/// # Returns
/// Configured Router
pub fn create_router(state: AppState) -> Router {
  let cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]);

  Router::new()
    .route(RANDOM_WORDS_PATH, get(get_random_words))
    .route("/health", get(health_check))
    .layer(cors)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Starts the server
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error if the server fails to start
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("backend server is running: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {}", e)))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;
  use std::sync::Arc;

  use wortkarte::SampleConfig;

  use super::*;
  use crate::config::Config;
  use crate::errors::Result as ApiResult;
  use crate::models::{SampleRequest, WordEntry};
  use crate::service::WordApiService;

  /// Dummy implementation for testing (never touches a corpus file)
  #[derive(Clone)]
  struct DummyService;

  impl WordApiService for DummyService {
    fn random_words(&self, _request: SampleRequest) -> ApiResult<Vec<WordEntry>> {
      Ok(Vec::new())
    }
  }

  fn create_test_state() -> AppState {
    let config = Config {
      bind_addr: "127.0.0.1:5002".to_string(),
      corpus_path: PathBuf::from("data/words.json"),
      sampling: SampleConfig::default(),
    };

    // Inject stub (no corpus load)
    let service = Arc::new(DummyService) as Arc<dyn WordApiService>;
    AppState::new(config, service)
  }

  #[test]
  fn test_router_creation() {
    let state = create_test_state();
    let _router = create_router(state);
    // Confirm that the router can be created
  }

  #[tokio::test]
  async fn test_bind_failure_is_config_error() {
    let mut state = create_test_state();
    state.config.bind_addr = "not an address".to_string();

    let err = run_server(state).await.unwrap_err();
    assert_eq!(err.code(), "config_error");
  }
}
