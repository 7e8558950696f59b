//! Uniform random sampling without replacement.
//!
//! Indices are drawn with `rand::seq::index::sample`, so every entry has the
//! same inclusion probability `n / len` and the corpus itself is never
//! reordered.

use rand::Rng;
use rand::seq::index;

use super::Corpus;
use crate::models::WordEntry;

impl Corpus {
  /// Draws `min(n, len)` distinct entries using the thread-local RNG.
  ///
  /// Result order is random. An empty corpus yields an empty vector.
  #[must_use]
  pub fn sample_random(&self, n: usize) -> Vec<WordEntry> {
    self.sample_with(&mut rand::rng(), n)
  }

  /// Draws `min(n, len)` distinct entries using the given RNG.
  #[must_use]
  pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<WordEntry> {
    let entries = self.entries();
    let amount = n.min(entries.len());
    if amount == 0 {
      return Vec::new();
    }

    index::sample(rng, entries.len(), amount).into_iter().map(|i| entries[i].clone()).collect()
  }
}

#[cfg(test)]
mod tests {
  use std::collections::{HashMap, HashSet};

  use rand::SeedableRng;
  use rand::rngs::StdRng;

  use super::*;

  fn corpus_of(size: u32) -> Corpus {
    let entries = (1..=size)
      .map(|id| WordEntry::new(id, format!("Wort{id}"), format!("word {id}"), "das", format!("Wörter{id}")))
      .collect();
    Corpus::from_entries(entries).unwrap()
  }

  #[test]
  fn sample_length_is_min_of_n_and_len() {
    let corpus = corpus_of(10);
    for n in [0, 1, 5, 10, 11, 100] {
      assert_eq!(corpus.sample_random(n).len(), n.min(10), "n={n}");
    }
  }

  #[test]
  fn sample_has_distinct_members_of_corpus() {
    let corpus = corpus_of(10);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
      let sample = corpus.sample_with(&mut rng, 5);
      let ids: HashSet<u32> = sample.iter().map(|e| e.id).collect();
      assert_eq!(ids.len(), 5);
      for entry in &sample {
        assert_eq!(corpus.get(entry.id), Some(entry));
      }
    }
  }

  #[test]
  fn oversized_request_returns_whole_corpus() {
    let corpus = corpus_of(4);
    let ids: HashSet<u32> = corpus.sample_random(9).iter().map(|e| e.id).collect();
    assert_eq!(ids, (1..=4).collect());
  }

  #[test]
  fn empty_corpus_yields_empty_sample() {
    let corpus = Corpus::empty();
    assert!(corpus.sample_random(0).is_empty());
    assert!(corpus.sample_random(5).is_empty());
  }

  #[test]
  fn sampling_leaves_storage_order_untouched() {
    let corpus = corpus_of(10);
    let before: Vec<u32> = corpus.entries().iter().map(|e| e.id).collect();
    for _ in 0..50 {
      let _ = corpus.sample_random(5);
    }
    let after: Vec<u32> = corpus.entries().iter().map(|e| e.id).collect();
    assert_eq!(before, after);
  }

  #[test]
  fn same_seed_same_sample() {
    let corpus = corpus_of(20);
    let a = corpus.sample_with(&mut StdRng::seed_from_u64(42), 5);
    let b = corpus.sample_with(&mut StdRng::seed_from_u64(42), 5);
    assert_eq!(a, b);
  }

  #[test]
  fn inclusion_frequency_converges_to_n_over_m() {
    const DRAWS: usize = 20_000;
    const M: u32 = 10;
    const N: usize = 3;

    let corpus = corpus_of(M);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts: HashMap<u32, usize> = HashMap::new();

    for _ in 0..DRAWS {
      for entry in corpus.sample_with(&mut rng, N) {
        *counts.entry(entry.id).or_default() += 1;
      }
    }

    let expected = N as f64 / f64::from(M);
    for id in 1..=M {
      let observed = counts.get(&id).copied().unwrap_or(0) as f64 / DRAWS as f64;
      assert!(
        (observed - expected).abs() < 0.02,
        "id={id} observed={observed:.4} expected={expected:.4}"
      );
    }
  }

  #[test]
  fn first_position_is_uniform() {
    // A comparator-based shuffle skews which entry lands first.
    const DRAWS: usize = 20_000;
    const M: u32 = 5;

    let corpus = corpus_of(M);
    let mut rng = StdRng::seed_from_u64(99);
    let mut firsts: HashMap<u32, usize> = HashMap::new();

    for _ in 0..DRAWS {
      let sample = corpus.sample_with(&mut rng, M as usize);
      *firsts.entry(sample[0].id).or_default() += 1;
    }

    let expected = 1.0 / f64::from(M);
    for id in 1..=M {
      let observed = firsts.get(&id).copied().unwrap_or(0) as f64 / DRAWS as f64;
      assert!((observed - expected).abs() < 0.02, "id={id} observed={observed:.4}");
    }
  }
}
