//! wortkarte-api crate
//!
//! Web server answering random-sample queries over the vocabulary corpus.
//!
//! ## Endpoints
//! - `GET /api/words/random` - Random words (optional `?count=N`, default 5)
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl http://127.0.0.1:5001/api/words/random
//! curl "http://127.0.0.1:5001/api/words/random?count=3"
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{SampleRequest, WordEntry};
pub use service::WordApiServiceFull;
