//! API configuration constants

/// Default bind address
///
/// Standard localhost port for development use.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5001";

/// Default path of the word list, relative to the working directory
pub const DEFAULT_CORPUS_PATH: &str = "data/words.json";

/// Environment variable: bind address
pub const ENV_BIND_ADDR: &str = "WORTKARTE_BIND_ADDR";

/// Environment variable: corpus file path
pub const ENV_CORPUS_PATH: &str = "WORTKARTE_CORPUS_PATH";

/// Environment variable: number of words returned by default
pub const ENV_SAMPLE_COUNT: &str = "WORTKARTE_SAMPLE_COUNT";

/// Environment variable: largest count a request may ask for
pub const ENV_MAX_SAMPLE_COUNT: &str = "WORTKARTE_MAX_SAMPLE_COUNT";
