//! Config loading from environment variables

use std::path::PathBuf;

use wortkarte::config::{DEFAULT_MAX_SAMPLE_COUNT, DEFAULT_SAMPLE_COUNT, SampleConfig};

use super::constants::{
  DEFAULT_BIND_ADDR, DEFAULT_CORPUS_PATH, ENV_BIND_ADDR, ENV_CORPUS_PATH, ENV_MAX_SAMPLE_COUNT,
  ENV_SAMPLE_COUNT,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5001")
  pub bind_addr: String,
  /// Word list file read once at startup
  pub corpus_path: PathBuf,
  /// Sampling bounds
  pub sampling: SampleConfig,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary key lookup
  ///
  /// `from_env` delegates here; tests pass a map instead of touching the
  /// process environment.
  ///
  /// # Errors
  /// Returns an error if a count is not a number or the bounds are inconsistent
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let corpus_path =
      PathBuf::from(lookup(ENV_CORPUS_PATH).unwrap_or_else(|| DEFAULT_CORPUS_PATH.to_string()));

    let default_count = parse_count(&lookup, ENV_SAMPLE_COUNT, DEFAULT_SAMPLE_COUNT)?;
    let max_count = parse_count(&lookup, ENV_MAX_SAMPLE_COUNT, DEFAULT_MAX_SAMPLE_COUNT)?;

    let sampling = SampleConfig::new(default_count, max_count);
    sampling.validate()?;

    Ok(Self {
      bind_addr,
      corpus_path,
      sampling,
    })
  }
}

fn parse_count<F>(lookup: &F, key: &str, default: usize) -> crate::errors::Result<usize>
where
  F: Fn(&str) -> Option<String>,
{
  match lookup(key) {
    None => Ok(default),
    Some(raw) => raw
      .trim()
      .parse()
      .map_err(|_| ApiError::config(format!("{key} must be a non-negative integer: {raw}"))),
  }
}
