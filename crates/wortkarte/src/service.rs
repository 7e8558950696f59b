// crates/wortkarte/src/service.rs

//! WortkarteService: facade of the wortkarte crate.
//!
//! - Corpus (loaded once, immutable)
//! - Sampling bounds (SampleConfig)
//!
//! The HTTP layer only needs this struct. It is constructed explicitly and
//! passed in, never held in a global.

use crate::config::SampleConfig;
use crate::corpus::Corpus;
use crate::errors::{WortkarteError, WortkarteResult};
use crate::models::WordEntry;

/// Random-sample word service.
#[derive(Debug, Clone)]
pub struct WortkarteService {
  corpus: Corpus,
  sampling: SampleConfig,
}

impl WortkarteService {
  /// Creates the service from an already loaded corpus.
  ///
  /// # Errors
  /// - `WortkarteError::Config` if the sampling bounds are invalid
  pub fn new(corpus: Corpus, sampling: SampleConfig) -> WortkarteResult<Self> {
    sampling.validate()?;
    Ok(Self { corpus, sampling })
  }

  /// Returns `min(count, corpus size)` distinct random entries.
  ///
  /// `None` uses the configured default count. An empty corpus yields an
  /// empty vector, never an error.
  ///
  /// # Errors
  /// - `WortkarteError::CountTooLarge` if `requested` exceeds `max_count`
  pub fn random_words(&self, requested: Option<usize>) -> WortkarteResult<Vec<WordEntry>> {
    let count = self.sampling.resolve(requested).ok_or(WortkarteError::CountTooLarge {
      requested: requested.unwrap_or_default(),
      max: self.sampling.max_count,
    })?;

    if self.corpus.is_empty() {
      tracing::warn!("word corpus is empty, returning no words");
    }

    Ok(self.corpus.sample_random(count))
  }

  /// The underlying corpus.
  pub fn corpus(&self) -> &Corpus {
    &self.corpus
  }

  /// The sampling bounds.
  pub fn sampling(&self) -> SampleConfig {
    self.sampling
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::ConfigError;

  fn service_with(size: u32, sampling: SampleConfig) -> WortkarteService {
    let entries = (1..=size)
      .map(|id| WordEntry::new(id, format!("Wort{id}"), format!("word {id}"), "das", "Wörter"))
      .collect();
    WortkarteService::new(Corpus::from_entries(entries).unwrap(), sampling).unwrap()
  }

  #[test]
  fn new_rejects_invalid_sampling() {
    let err = WortkarteService::new(Corpus::empty(), SampleConfig::new(0, 5)).unwrap_err();
    assert!(matches!(err, WortkarteError::Config(ConfigError::InvalidDefaultCount { actual: 0 })));
  }

  #[test]
  fn default_count_is_five() {
    let service = service_with(10, SampleConfig::default());
    assert_eq!(service.random_words(None).unwrap().len(), 5);
  }

  #[test]
  fn explicit_count_is_honored() {
    let service = service_with(10, SampleConfig::default());
    assert_eq!(service.random_words(Some(2)).unwrap().len(), 2);
    assert_eq!(service.random_words(Some(0)).unwrap().len(), 0);
  }

  #[test]
  fn count_above_max_is_rejected() {
    let service = service_with(10, SampleConfig::new(5, 8));
    let err = service.random_words(Some(9)).unwrap_err();
    assert!(matches!(err, WortkarteError::CountTooLarge { requested: 9, max: 8 }));
  }

  #[test]
  fn empty_corpus_is_not_an_error() {
    let service = WortkarteService::new(Corpus::empty(), SampleConfig::default()).unwrap();
    assert!(service.random_words(None).unwrap().is_empty());
    assert!(service.corpus().is_empty());
    assert_eq!(service.sampling(), SampleConfig::default());
  }
}
