//! Word sources
//!
//! The state machine only sees the `WordSource` trait; production code talks
//! HTTP through `HttpWordSource`, tests plug in in-memory sources.

use std::future::Future;

use reqwest::{Client, Url};
use tracing::debug;
use wortkarte::WordEntry;

use crate::config::ClientConfig;
use crate::errors::{ClientError, Result};

/// Path of the random words endpoint, relative to the base URL
pub const RANDOM_WORDS_PATH: &str = "/api/words/random";

/// Something that can produce a random batch of words
pub trait WordSource {
  /// Fetches one random batch
  ///
  /// # Errors
  /// Any transport or decoding failure
  fn fetch_random(&self) -> impl Future<Output = Result<Vec<WordEntry>>> + Send;
}

/// `WordSource` over `GET {base_url}/api/words/random`
#[derive(Debug, Clone)]
pub struct HttpWordSource {
  client: Client,
  url: String,
  count: Option<usize>,
}

impl HttpWordSource {
  /// Creates a source for the given base URL
  ///
  /// A loopback backend is always reached directly, bypassing any system proxy.
  ///
  /// # Errors
  /// Returns an error if `api_url` is not a valid URL or the HTTP client cannot be built
  pub fn new(api_url: &str, count: Option<usize>) -> Result<Self> {
    let base = Url::parse(api_url)
      .map_err(|e| ClientError::config(format!("invalid API URL {api_url}: {e}")))?;

    let mut builder =
      Client::builder().user_agent(concat!("wortkarte-client/", env!("CARGO_PKG_VERSION")));
    if matches!(base.host_str(), Some("localhost" | "127.0.0.1" | "[::1]")) {
      builder = builder.no_proxy();
    }
    let client = builder.build()?;

    Ok(Self {
      client,
      url: format!("{}{}", api_url.trim_end_matches('/'), RANDOM_WORDS_PATH),
      count,
    })
  }

  /// Creates a source from the client configuration
  ///
  /// # Errors
  /// Returns an error if the HTTP client cannot be built
  pub fn from_config(config: &ClientConfig) -> Result<Self> {
    Self::new(&config.api_url, config.count)
  }

  /// Full endpoint URL
  #[must_use]
  pub fn url(&self) -> &str {
    &self.url
  }
}

impl WordSource for HttpWordSource {
  async fn fetch_random(&self) -> Result<Vec<WordEntry>> {
    let mut request = self.client.get(&self.url);
    if let Some(count) = self.count {
      request = request.query(&[("count", count)]);
    }

    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
      return Err(ClientError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    let words: Vec<WordEntry> = serde_json::from_slice(&body)?;

    debug!(words = words.len(), url = %self.url, "words fetched");

    Ok(words)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn url_joins_base_and_path() {
    let source = HttpWordSource::new("http://127.0.0.1:5001", None).unwrap();
    assert_eq!(source.url(), "http://127.0.0.1:5001/api/words/random");
  }

  #[test]
  fn trailing_slash_is_trimmed() {
    let source = HttpWordSource::new("http://words.local/", Some(3)).unwrap();
    assert_eq!(source.url(), "http://words.local/api/words/random");
  }

  #[test]
  fn invalid_url_is_config_error() {
    let err = HttpWordSource::new("not a url", None).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
  }

  #[tokio::test]
  async fn unreachable_server_is_transport_error() {
    // Port 9 (discard) on localhost: nothing listens there in test environments
    let source = HttpWordSource::new("http://127.0.0.1:9", None).unwrap();
    let err = source.fetch_random().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "got {err:?}");
  }
}
