//! models module
pub mod model_definition;

/// Re-exports
pub use model_definition::{ARTIKEL_DAS, ARTIKEL_DER, ARTIKEL_DIE, WordEntry};
