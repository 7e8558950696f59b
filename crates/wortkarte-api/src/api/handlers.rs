//! HTTP handler definitions

use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::models::{SampleRequest, WordEntry};

use super::state::AppState;

/// GET /api/words/random endpoint
///
/// Draws random words from the corpus without replacement.
///
/// # Query
/// - `count` (optional): number of words, server default when absent
///
/// # Response
/// - 200 OK: JSON array of word entries (empty if the corpus is empty)
/// - 400 Bad Request: `count` above the configured maximum or not a number
pub async fn get_random_words(
  State(state): State<AppState>,
  query: Result<Query<SampleRequest>, QueryRejection>,
) -> Result<Json<Vec<WordEntry>>, ApiError> {
  let Query(request) = query.map_err(|rejection| ApiError::invalid_input(rejection.body_text()))?;
  debug!(count = ?request.count, "random words requested");

  // Sampling is O(n) over an in-memory slice, no need for spawn_blocking
  let words = state.service.random_words(request)?;

  info!(words = words.len(), "random words served");

  Ok(Json(words))
}

/// Health check endpoint
///
/// Confirms that the server is running.
pub async fn health_check() -> &'static str {
  "OK"
}
