//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, DEFAULT_CORPUS_PATH, ENV_BIND_ADDR, ENV_CORPUS_PATH, ENV_MAX_SAMPLE_COUNT,
  ENV_SAMPLE_COUNT,
};
pub use env::Config;
