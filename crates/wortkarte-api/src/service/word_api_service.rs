//! Random word service

use wortkarte::{Corpus, WortkarteService};

use crate::config::Config;
use crate::errors::Result;
use crate::models::{SampleRequest, WordEntry};

/// Common interface for the random word service
///
/// This trait allows swapping the production implementation (`WordApiServiceFull`) with
/// test stubs.
pub trait WordApiService: Send + Sync {
  /// Draws random words without replacement
  ///
  /// # Errors
  /// - Requested count above the configured maximum
  fn random_words(&self, request: SampleRequest) -> Result<Vec<WordEntry>>;
}

/// Random word service backed by the load-once corpus
#[derive(Debug, Clone)]
pub struct WordApiServiceFull {
  inner: WortkarteService,
}

impl WordApiServiceFull {
  /// Initializes the service, reading the corpus file named in `config`
  ///
  /// A missing or malformed corpus file does not fail initialization; the
  /// service then answers every request with an empty list.
  ///
  /// # Errors
  /// Returns an error if the sampling bounds are invalid
  pub fn new(config: &Config) -> Result<Self> {
    let corpus = Corpus::load(&config.corpus_path);
    Self::with_corpus(corpus, config)
  }

  /// Initializes the service with an already constructed corpus
  ///
  /// # Errors
  /// Returns an error if the sampling bounds are invalid
  pub fn with_corpus(corpus: Corpus, config: &Config) -> Result<Self> {
    let inner = WortkarteService::new(corpus, config.sampling)?;
    Ok(Self { inner })
  }

  /// Number of words available for sampling
  #[must_use]
  pub fn corpus_len(&self) -> usize {
    self.inner.corpus().len()
  }
}

/// Production implementation of trait `WordApiService`
impl WordApiService for WordApiServiceFull {
  fn random_words(&self, request: SampleRequest) -> Result<Vec<WordEntry>> {
    Ok(self.inner.random_words(request.count)?)
  }
}
