//! Request model definition

use serde::Deserialize;

/// Query string of `GET /api/words/random`
///
/// `count` is optional; the server-side default applies when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SampleRequest {
  /// Number of words to draw
  #[serde(default)]
  pub count: Option<usize>,
}
