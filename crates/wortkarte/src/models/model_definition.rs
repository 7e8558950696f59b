//! Data Model Definition
use serde::{Deserialize, Serialize};

/// Masculine article
pub const ARTIKEL_DER: &str = "der";
/// Feminine article
pub const ARTIKEL_DIE: &str = "die";
/// Neuter article
pub const ARTIKEL_DAS: &str = "das";

/// One vocabulary record
///
/// Same shape on disk (corpus file) and on the wire (`GET /api/words/random`):
///
/// ```json
/// { "id": 1, "word": "Haus", "meaning": "House", "artikel": "das", "plural": "Häuser" }
/// ```
///
/// `artikel` is kept as a plain string so markers outside
/// `der` / `die` / `das` survive a round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
  /// Unique, stable key
  pub id: u32,

  /// Surface form
  pub word: String,

  /// Translation / gloss
  pub meaning: String,

  /// Grammatical gender marker
  pub artikel: String,

  /// Plural surface form (may equal `word`)
  pub plural: String,
}

impl WordEntry {
  /// Constructor for WordEntry
  pub fn new(
    id: u32,
    word: impl Into<String>,
    meaning: impl Into<String>,
    artikel: impl Into<String>,
    plural: impl Into<String>,
  ) -> Self {
    Self {
      id,
      word: word.into(),
      meaning: meaning.into(),
      artikel: artikel.into(),
      plural: plural.into(),
    }
  }

  /// Whether `artikel` is one of the definite articles.
  #[must_use]
  pub fn has_known_artikel(&self) -> bool {
    matches!(self.artikel.as_str(), ARTIKEL_DER | ARTIKEL_DIE | ARTIKEL_DAS)
  }

  /// Whether the plural form equals the singular.
  #[must_use]
  pub fn is_plural_invariant(&self) -> bool {
    self.plural == self.word
  }
}
