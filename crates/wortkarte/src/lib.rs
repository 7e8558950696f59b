//! wortkarte vocabulary library
//!
//! Word entries, the load-once corpus and uniform random sampling over it.

/// Configuration module - sampling bounds (`SampleConfig`)
pub mod config;

/// Corpus module - load-once word collection and random sampling
pub mod corpus;

/// Error module - ConfigError, CorpusError, WortkarteError
pub mod errors;

/// Data model module - `WordEntry`
pub mod models;

/// Service module - `WortkarteService` facade over corpus and sampling bounds
pub mod service;

/// Re-exports
pub use config::SampleConfig;
pub use corpus::Corpus;
pub use errors::{WortkarteError, WortkarteResult};
pub use models::WordEntry;
pub use service::WortkarteService;
