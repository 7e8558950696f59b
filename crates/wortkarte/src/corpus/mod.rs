//! corpus module

mod corpus_store;
mod sampler;

/// Re-exports
pub use corpus_store::Corpus;
