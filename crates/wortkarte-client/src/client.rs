//! FlashcardClient: drives fetch cycles against a `WordSource`.

use tracing::info;

use crate::source::WordSource;
use crate::state::{ViewState, WordListModel};

/// One flashcard session
///
/// Owns its view state exclusively. No retry, no polling: a cycle starts on
/// mount and whenever the user asks for new words.
#[derive(Debug)]
pub struct FlashcardClient<S> {
  source: S,
  model: WordListModel,
}

impl<S: WordSource> FlashcardClient<S> {
  /// New session in `Idle`
  pub fn new(source: S) -> Self {
    Self {
      source,
      model: WordListModel::new(),
    }
  }

  /// First fetch cycle. Does nothing once the session has left `Idle`.
  pub async fn mount(&mut self) -> &ViewState {
    if matches!(self.model.state(), ViewState::Idle) {
      self.refresh().await;
    }
    self.model.state()
  }

  /// "New words": runs one fetch cycle and commits its outcome
  pub async fn refresh(&mut self) -> &ViewState {
    let ticket = self.model.begin_fetch();
    let result = self.source.fetch_random().await;
    if self.model.complete(ticket, result) {
      info!(generation = ticket.generation(), cards = self.model.cards().len(), "fetch cycle finished");
    }
    self.model.state()
  }

  /// Flips the reveal state of one card; purely local
  pub fn toggle(&mut self, id: u32) -> Option<bool> {
    self.model.toggle(id)
  }

  /// Current view state
  pub fn state(&self) -> &ViewState {
    self.model.state()
  }

  /// Underlying model
  pub fn model(&self) -> &WordListModel {
    &self.model
  }
}
