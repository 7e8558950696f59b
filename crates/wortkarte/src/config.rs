// crates/wortkarte/src/config.rs

use serde::Deserialize;

use crate::errors::ConfigError;

/// Number of words returned when the request does not specify a count.
pub const DEFAULT_SAMPLE_COUNT: usize = 5;

/// Upper bound for an explicitly requested count.
pub const DEFAULT_MAX_SAMPLE_COUNT: usize = 50;

/// Sampling bounds for the "get N random words" query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SampleConfig {
  /// Count used when the request carries none
  #[serde(default = "default_count")]
  pub default_count: usize,
  /// Largest count a request may ask for
  #[serde(default = "default_max_count")]
  pub max_count: usize,
}

fn default_count() -> usize {
  DEFAULT_SAMPLE_COUNT
}

fn default_max_count() -> usize {
  DEFAULT_MAX_SAMPLE_COUNT
}

impl Default for SampleConfig {
  fn default() -> Self {
    Self {
      default_count: DEFAULT_SAMPLE_COUNT,
      max_count: DEFAULT_MAX_SAMPLE_COUNT,
    }
  }
}

impl SampleConfig {
  /// Creates a configuration from explicit bounds (not validated yet).
  #[must_use]
  pub fn new(default_count: usize, max_count: usize) -> Self {
    Self { default_count, max_count }
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `default_count` >= 1
  /// - `max_count` >= `default_count`
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.default_count < 1 {
      return Err(ConfigError::InvalidDefaultCount {
        actual: self.default_count,
      });
    }

    if self.max_count < self.default_count {
      return Err(ConfigError::InvalidMaxCount {
        default_count: self.default_count,
        max_count: self.max_count,
      });
    }

    Ok(())
  }

  /// Resolves the count to sample for a request.
  ///
  /// `None` falls back to `default_count`. Returns `None` when the requested
  /// count exceeds `max_count`.
  #[must_use]
  pub fn resolve(&self, requested: Option<usize>) -> Option<usize> {
    match requested {
      None => Some(self.default_count),
      Some(n) if n <= self.max_count => Some(n),
      Some(_) => None,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_values() {
    let config = SampleConfig::default();
    assert_eq!(config.default_count, 5);
    assert_eq!(config.max_count, 50);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn deserialize_fills_missing_fields() {
    let config: SampleConfig = serde_json::from_str(r#"{"default_count": 8}"#).unwrap();
    assert_eq!(config.default_count, 8);
    assert_eq!(config.max_count, DEFAULT_MAX_SAMPLE_COUNT);
  }

  // ─── validate() ────────────────────────────────────────────────────────

  #[test]
  fn validate_accepts_default_equals_max() {
    assert!(SampleConfig::new(10, 10).validate().is_ok());
  }

  #[test]
  fn validate_rejects_zero_default() {
    let err = SampleConfig::new(0, 10).validate().unwrap_err();
    assert_eq!(err, ConfigError::InvalidDefaultCount { actual: 0 });
  }

  #[test]
  fn validate_rejects_max_below_default() {
    let err = SampleConfig::new(5, 4).validate().unwrap_err();
    match err {
      ConfigError::InvalidMaxCount {
        default_count,
        max_count,
      } => {
        assert_eq!(default_count, 5);
        assert_eq!(max_count, 4);
      }
      _ => panic!("expected InvalidMaxCount error"),
    }
  }

  // ─── resolve() ─────────────────────────────────────────────────────────

  #[test]
  fn resolve_uses_default_when_absent() {
    assert_eq!(SampleConfig::default().resolve(None), Some(5));
  }

  #[test]
  fn resolve_accepts_zero_and_max() {
    let config = SampleConfig::default();
    assert_eq!(config.resolve(Some(0)), Some(0));
    assert_eq!(config.resolve(Some(50)), Some(50));
  }

  #[test]
  fn resolve_rejects_above_max() {
    assert_eq!(SampleConfig::default().resolve(Some(51)), None);
  }
}
