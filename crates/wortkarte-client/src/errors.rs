//! Client error definitions

use std::sync::Arc;

use thiserror::Error;

/// Errors raised while fetching words
///
/// None of these reach the user verbatim: the state machine logs them and
/// shows a generic message instead.
#[derive(Debug, Error, Clone)]
pub enum ClientError {
  /// Network unreachable, connection refused, body read failure
  #[error("request failed: {0}")]
  Transport(Arc<reqwest::Error>),

  /// Non-2xx response
  #[error("unexpected HTTP status: {0}")]
  Status(u16),

  /// Response body is not a JSON array of word entries
  #[error("malformed response body: {0}")]
  Decode(Arc<serde_json::Error>),

  /// Invalid client configuration
  #[error("configuration error: {0}")]
  Config(String),
}

impl ClientError {
  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

impl From<reqwest::Error> for ClientError {
  fn from(err: reqwest::Error) -> Self {
    Self::Transport(Arc::new(err))
  }
}

impl From<serde_json::Error> for ClientError {
  fn from(err: serde_json::Error) -> Self {
    Self::Decode(Arc::new(err))
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;
