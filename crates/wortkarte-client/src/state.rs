//! Fetch/render state machine
//!
//! ```text
//! Idle --mount--> Loading --ok--> Loaded(cards)
//!                    |  ^
//!                    |  +--------- new words (from Loaded or Failed)
//!                    +--err--> Failed(message)
//! ```
//!
//! Every fetch cycle takes a [`FetchTicket`]. Only the completion carrying
//! the latest ticket is committed, so a slow earlier request can never
//! overwrite a newer result.

use tracing::{debug, error};
use wortkarte::WordEntry;

use crate::errors::ClientError;

/// Message shown when a fetch fails. The underlying error is only logged.
pub const FETCH_ERROR_MESSAGE: &str =
  "Could not load words. Please make sure the backend server is running.";

/// One rendered word with its local reveal state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
  entry: WordEntry,
  revealed: bool,
}

impl Card {
  /// New card, hidden
  #[must_use]
  pub fn new(entry: WordEntry) -> Self {
    Self { entry, revealed: false }
  }

  /// Flips the reveal state and returns the new value
  pub fn toggle(&mut self) -> bool {
    self.revealed = !self.revealed;
    self.revealed
  }

  /// Whether meaning, article and plural are shown
  #[must_use]
  pub fn is_revealed(&self) -> bool {
    self.revealed
  }

  /// The word behind the card
  #[must_use]
  pub fn entry(&self) -> &WordEntry {
    &self.entry
  }

  /// Card key
  #[must_use]
  pub fn id(&self) -> u32 {
    self.entry.id
  }
}

/// What the presentation layer shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
  /// Not mounted yet
  #[default]
  Idle,
  /// A request is in flight
  Loading,
  /// Last request succeeded
  Loaded(Vec<Card>),
  /// Last request failed; user-facing message
  Failed(String),
}

/// Generation of one fetch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
  generation: u64,
}

impl FetchTicket {
  /// Monotonically increasing cycle number
  #[must_use]
  pub fn generation(&self) -> u64 {
    self.generation
  }
}

/// View state of one flashcard session
#[derive(Debug, Default)]
pub struct WordListModel {
  state: ViewState,
  generation: u64,
}

impl WordListModel {
  /// Fresh model in `Idle`
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Current view state
  #[must_use]
  pub fn state(&self) -> &ViewState {
    &self.state
  }

  /// Cards of the `Loaded` state, empty otherwise
  #[must_use]
  pub fn cards(&self) -> &[Card] {
    match &self.state {
      ViewState::Loaded(cards) => cards.as_slice(),
      _ => &[],
    }
  }

  /// Whether a fetch is in flight
  #[must_use]
  pub fn is_loading(&self) -> bool {
    matches!(self.state, ViewState::Loading)
  }

  /// Enters `Loading`, discarding the previous result or error
  pub fn begin_fetch(&mut self) -> FetchTicket {
    self.generation += 1;
    self.state = ViewState::Loading;
    FetchTicket {
      generation: self.generation,
    }
  }

  /// Commits the outcome of a fetch cycle.
  ///
  /// Returns `false` and leaves the state untouched if `ticket` is not the
  /// latest one issued.
  pub fn complete(
    &mut self,
    ticket: FetchTicket,
    result: Result<Vec<WordEntry>, ClientError>,
  ) -> bool {
    if ticket.generation != self.generation {
      debug!(
        stale = ticket.generation,
        latest = self.generation,
        "dropping stale fetch result"
      );
      return false;
    }

    self.state = match result {
      Ok(words) => ViewState::Loaded(words.into_iter().map(Card::new).collect()),
      Err(e) => {
        error!(error = %e, "failed to fetch words");
        ViewState::Failed(FETCH_ERROR_MESSAGE.to_string())
      }
    };
    true
  }

  /// Flips the reveal state of the card with `id`.
  ///
  /// Returns the new state, or `None` if no such card is shown.
  pub fn toggle(&mut self, id: u32) -> Option<bool> {
    match &mut self.state {
      ViewState::Loaded(cards) => cards.iter_mut().find(|c| c.id() == id).map(Card::toggle),
      _ => None,
    }
  }
}
