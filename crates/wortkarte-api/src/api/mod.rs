//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_random_words, health_check};
pub use routes::{RANDOM_WORDS_PATH, create_router, run_server};
pub use state::AppState;
