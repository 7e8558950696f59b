//! Client configuration from environment variables

use crate::errors::{ClientError, Result};

/// Default base URL of the word service
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5001";

/// Environment variable: base URL of the word service
pub const ENV_API_URL: &str = "WORTKARTE_API_URL";

/// Environment variable: number of words to request (server default when unset)
pub const ENV_CLIENT_COUNT: &str = "WORTKARTE_CLIENT_COUNT";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
  /// Base URL, e.g. "http://127.0.0.1:5001"
  pub api_url: String,
  /// Explicit word count; `None` leaves the choice to the server
  pub count: Option<usize>,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_url: DEFAULT_API_URL.to_string(),
      count: None,
    }
  }
}

impl ClientConfig {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if `WORTKARTE_CLIENT_COUNT` is not a number
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary key lookup
  ///
  /// # Errors
  /// Returns an error if the count is not a number
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let api_url = lookup(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let count = match lookup(ENV_CLIENT_COUNT) {
      None => None,
      Some(raw) => Some(raw.trim().parse().map_err(|_| {
        ClientError::config(format!("{ENV_CLIENT_COUNT} must be a non-negative integer: {raw}"))
      })?),
    };

    Ok(Self { api_url, count })
  }
}
