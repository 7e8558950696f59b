//! Terminal presentation of the view state

use std::fmt::Write as _;
use std::str::FromStr;

use crate::state::{Card, ViewState};

/// Shown while a request is in flight
pub const LOADING_MESSAGE: &str = "Loading words...";

/// Shown for a successful but empty result
pub const EMPTY_MESSAGE: &str = "No words found. Try fetching new words.";

/// Help line listing the commands
pub const HELP: &str = "[n] new words   [1-9..] reveal/hide card   [q] quit";

/// User command read from one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  /// Fetch a new batch
  NewWords,
  /// Toggle the card at this 1-based position
  Toggle(usize),
  /// Leave the session
  Quit,
  /// Show the command list
  Help,
}

impl FromStr for Command {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "n" | "new" => Ok(Self::NewWords),
      "q" | "quit" | "exit" => Ok(Self::Quit),
      "h" | "help" | "?" => Ok(Self::Help),
      other => match other.parse::<usize>() {
        Ok(position) if position > 0 => Ok(Self::Toggle(position)),
        _ => Err(format!("Unknown command: {other}")),
      },
    }
  }
}

/// Renders the whole view
#[must_use]
pub fn render(state: &ViewState) -> String {
  match state {
    ViewState::Idle => String::new(),
    ViewState::Loading => LOADING_MESSAGE.to_string(),
    ViewState::Failed(message) => message.clone(),
    ViewState::Loaded(cards) if cards.is_empty() => EMPTY_MESSAGE.to_string(),
    ViewState::Loaded(cards) => {
      let mut out = String::new();
      for (i, card) in cards.iter().enumerate() {
        out.push_str(&render_card(i + 1, card));
      }
      out
    }
  }
}

/// Renders one card: the word always, details only when revealed
#[must_use]
pub fn render_card(position: usize, card: &Card) -> String {
  let entry = card.entry();
  let button = if card.is_revealed() { "Hide" } else { "Reveal" };

  let mut out = format!("{position:>2}. {}  [{button}]\n", entry.word);
  if card.is_revealed() {
    let _ = writeln!(out, "      Meaning: {}", entry.meaning);
    let _ = writeln!(out, "      Article: {}", entry.artikel);
    if entry.is_plural_invariant() {
      let _ = writeln!(out, "      Plural:  {} (unchanged)", entry.plural);
    } else {
      let _ = writeln!(out, "      Plural:  {}", entry.plural);
    }
  }
  out
}
