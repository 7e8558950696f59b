//! Corpus: the load-once word collection.
//!
//! The corpus is read from a JSON file exactly once at startup and never
//! mutated afterwards. Clones share the same backing slice.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::errors::CorpusError;
use crate::models::WordEntry;

/// Immutable, validated sequence of word entries.
///
/// # Invariants
/// - ids are unique
/// - `word` and `meaning` are non-empty
#[derive(Debug, Clone, Default)]
pub struct Corpus {
  entries: Arc<[WordEntry]>,
}

impl Corpus {
  /// Empty corpus. Sampling from it always yields an empty sequence.
  #[must_use]
  pub fn empty() -> Self {
    Self::default()
  }

  /// Builds a validated corpus from in-memory entries.
  ///
  /// Storage order is preserved.
  ///
  /// # Errors
  /// - `CorpusError::EmptyField` if `word` or `meaning` is empty
  /// - `CorpusError::DuplicateId` if two entries share an id
  pub fn from_entries(entries: Vec<WordEntry>) -> Result<Self, CorpusError> {
    let mut seen = HashSet::with_capacity(entries.len());

    for entry in &entries {
      if entry.word.trim().is_empty() {
        return Err(CorpusError::EmptyField {
          id: entry.id,
          field: "word",
        });
      }
      if entry.meaning.trim().is_empty() {
        return Err(CorpusError::EmptyField {
          id: entry.id,
          field: "meaning",
        });
      }
      if !seen.insert(entry.id) {
        return Err(CorpusError::DuplicateId { id: entry.id });
      }
    }

    Ok(Self {
      entries: entries.into(),
    })
  }

  /// Reads and validates the corpus file.
  ///
  /// # Errors
  /// - `CorpusError::Read` if the file cannot be read
  /// - `CorpusError::Parse` if it is not a JSON array of word entries
  /// - validation errors from [`Corpus::from_entries`]
  pub fn try_load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
    let path = path.as_ref();

    let data = std::fs::read_to_string(path).map_err(|e| CorpusError::Read {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    let entries: Vec<WordEntry> = serde_json::from_str(&data).map_err(|e| CorpusError::Parse {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    Self::from_entries(entries)
  }

  /// Loads the corpus, degrading to an empty corpus on any failure.
  ///
  /// A missing or malformed file is logged and never aborts startup; the
  /// service then answers every query with an empty result.
  pub fn load(path: impl AsRef<Path>) -> Self {
    let path = path.as_ref();

    match Self::try_load(path) {
      Ok(corpus) => {
        if corpus.is_empty() {
          warn!(path = %path.display(), "corpus file contains no words");
        } else {
          info!(path = %path.display(), words = corpus.len(), "words loaded");
        }
        corpus
      }
      Err(e) => {
        error!(path = %path.display(), error = %e, "failed to load corpus, serving empty corpus");
        Self::empty()
      }
    }
  }

  /// Number of entries.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the corpus has no entries.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Entries in storage order.
  #[must_use]
  pub fn entries(&self) -> &[WordEntry] {
    &self.entries
  }

  /// Looks up an entry by id.
  #[must_use]
  pub fn get(&self, id: u32) -> Option<&WordEntry> {
    self.entries.iter().find(|e| e.id == id)
  }
}
