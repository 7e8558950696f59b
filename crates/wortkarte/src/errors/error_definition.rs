//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Sampling configuration (`SampleConfig`) errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
  /// default_count < 1
  #[error("default_count must be at least 1: actual={actual}")]
  InvalidDefaultCount {
    /// Value actually specified
    actual: usize,
  },

  /// max_count < default_count
  #[error(
    "max_count must be greater than or equal to default_count: \
     default_count={default_count}, max_count={max_count}"
  )]
  InvalidMaxCount {
    /// default_count
    default_count: usize,
    /// max_count
    max_count: usize,
  },
}

/// Corpus loading errors
///
/// Every variant is a startup-time condition. `Corpus::load` turns them into
/// a warning plus an empty corpus, `Corpus::try_load` hands them to the caller.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum CorpusError {
  /// The backing file could not be read
  #[error("failed to read corpus file: path={path:?}, error={source}")]
  Read {
    /// Path of the corpus file
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// The backing file is not a JSON array of word entries
  #[error("failed to parse corpus file: path={path:?}, error={source}")]
  Parse {
    /// Path of the corpus file
    path: PathBuf,
    /// Underlying JSON error
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// Two entries share the same id
  #[error("duplicate word id in corpus: id={id}")]
  DuplicateId {
    /// The repeated id
    id: u32,
  },

  /// A required text field is empty
  #[error("word entry has an empty field: id={id}, field={field}")]
  EmptyField {
    /// Id of the offending entry
    id: u32,
    /// Name of the empty field
    field: &'static str,
  },
}

/// Unified error
/// Public APIs of this crate return this error
/// Use as `WortkarteResult<T>` = `Result<T, WortkarteError>`
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum WortkarteError {
  /// Corpus related error
  #[error(transparent)]
  Corpus(#[from] CorpusError),

  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Requested sample size is above the configured maximum
  #[error("too many words requested: requested={requested}, max={max}")]
  CountTooLarge {
    /// Requested count
    requested: usize,
    /// Configured maximum
    max: usize,
  },
}

/// Standard Result type alias of the wortkarte crate
pub type WortkarteResult<T> = Result<T, WortkarteError>;
