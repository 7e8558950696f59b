//! crates/wortkarte/tests/corpus_sampling.rs
//!
//! Integration test for the corpus lifecycle.
//! Load the bundled word list -> Sample repeatedly -> Verify sampling rules.

use std::collections::HashSet;
use std::path::PathBuf;

use tempfile::TempDir;

use wortkarte::config::SampleConfig;
use wortkarte::{Corpus, WordEntry};

/// Path of the word list shipped with the workspace.
fn bundled_words() -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/words.json")
}

/// Ten-word corpus used by the fetch lifecycle scenario.
fn ten_words() -> Vec<WordEntry> {
  vec![
    WordEntry::new(1, "Haus", "House", "das", "Häuser"),
    WordEntry::new(2, "Auto", "Car", "das", "Autos"),
    WordEntry::new(3, "Frau", "Woman", "die", "Frauen"),
    WordEntry::new(4, "Mann", "Man", "der", "Männer"),
    WordEntry::new(5, "Kind", "Child", "das", "Kinder"),
    WordEntry::new(6, "Buch", "Book", "das", "Bücher"),
    WordEntry::new(7, "Tisch", "Table", "der", "Tische"),
    WordEntry::new(8, "Stuhl", "Chair", "der", "Stühle"),
    WordEntry::new(9, "Lampe", "Lamp", "die", "Lampen"),
    WordEntry::new(10, "Fenster", "Window", "das", "Fenster"),
  ]
}

#[test]
fn bundled_word_list_loads() {
  let corpus = Corpus::try_load(bundled_words()).expect("bundled word list should be valid");

  assert!(corpus.len() >= 10);
  assert!(corpus.entries().iter().all(WordEntry::has_known_artikel));
}

#[test]
fn default_request_against_ten_words() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("words.json");
  std::fs::write(&path, serde_json::to_string(&ten_words()).unwrap()).unwrap();

  let corpus = Corpus::load(&path);
  let count = SampleConfig::default().resolve(None).unwrap();

  // Two independent draws: each is 5 distinct members, overlap between them is allowed.
  for _ in 0..2 {
    let sample = corpus.sample_random(count);
    assert_eq!(sample.len(), 5);

    let ids: HashSet<u32> = sample.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), 5);
    assert!(ids.iter().all(|id| (1..=10).contains(id)));
  }
}

#[test]
fn every_word_is_eventually_drawn() {
  let corpus = Corpus::from_entries(ten_words()).unwrap();
  let mut seen = HashSet::new();

  for _ in 0..500 {
    seen.extend(corpus.sample_random(5).into_iter().map(|e| e.id));
  }

  assert_eq!(seen.len(), 10);
}

#[test]
fn unreadable_source_still_serves_empty_samples() {
  let corpus = Corpus::load("/nonexistent/path/to/words.json");

  assert!(corpus.is_empty());
  assert!(corpus.sample_random(5).is_empty());
}
