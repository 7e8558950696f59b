//! wortkarte-client crate
//!
//! Flashcard client for the random word service.
//!
//! - [`source`]: where words come from (`HttpWordSource` over `GET /api/words/random`)
//! - [`state`]: fetch/render state machine and per-card reveal state
//! - [`client`]: drives one fetch cycle at a time against a source
//! - [`render`]: terminal presentation of the view state

pub mod client;
pub mod config;
pub mod errors;
pub mod render;
pub mod source;
pub mod state;

pub use client::FlashcardClient;
pub use config::ClientConfig;
pub use errors::ClientError;
pub use source::{HttpWordSource, WordSource};
pub use state::{Card, FetchTicket, ViewState, WordListModel};
