//! Quotes a couple collects together, and the quote-of-the-day picker.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::couple::Slot;

/// Author recorded when the participant leaves the field blank.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A saved quote. Never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
  pub quote_id:   Uuid,
  pub couple_id:  Uuid,
  pub text:       String,
  pub author:     String,
  /// The slot of the participant who saved it.
  pub added_by:   Slot,
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::JournalStore::add_quote`].
#[derive(Debug, Clone)]
pub struct NewQuote {
  pub couple_id: Uuid,
  pub text:      String,
  pub author:    String,
  pub added_by:  Slot,
}

/// A built-in quote shown while a couple has saved none of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FallbackQuote {
  pub text:   &'static str,
  pub author: &'static str,
}

pub const FALLBACK_QUOTES: [FallbackQuote; 4] = [
  FallbackQuote {
    text:   "Cinta tidak pernah meminta, ia selalu memberi.",
    author: "Kahlil Gibran",
  },
  FallbackQuote {
    text:   "Aku mencintaimu bukan karena siapa dirimu, melainkan karena siapa \
             diriku saat bersamamu.",
    author: "Roy Croft",
  },
  FallbackQuote {
    text:   "Mencintai bukan hanya tentang siapa yang membuatmu tertawa, tetapi \
             siapa yang membuatmu bahagia.",
    author: "Anonymous",
  },
  FallbackQuote {
    text:   "Cinta sejati tidak pernah berakhir. Cinta sejati adalah api abadi.",
    author: "Bruce Lee",
  },
];

/// The result of [`pick_quote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum QuoteOfTheDay {
  Saved(Quote),
  Fallback(FallbackQuote),
}

impl QuoteOfTheDay {
  pub fn text(&self) -> &str {
    match self {
      Self::Saved(q) => &q.text,
      Self::Fallback(f) => f.text,
    }
  }

  pub fn author(&self) -> &str {
    match self {
      Self::Saved(q) => &q.author,
      Self::Fallback(f) => f.author,
    }
  }
}

/// Pick one of `quotes` uniformly at random, or one of [`FALLBACK_QUOTES`]
/// when there are none. Each call is independent.
pub fn pick_quote<R>(mut quotes: Vec<Quote>, rng: &mut R) -> QuoteOfTheDay
where
  R: Rng + ?Sized,
{
  if quotes.is_empty() {
    let i = rng.random_range(0..FALLBACK_QUOTES.len());
    return QuoteOfTheDay::Fallback(FALLBACK_QUOTES[i]);
  }
  let i = rng.random_range(0..quotes.len());
  QuoteOfTheDay::Saved(quotes.swap_remove(i))
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use rand::{SeedableRng, rngs::StdRng};

  use super::*;

  fn quote(text: &str) -> Quote {
    Quote {
      quote_id:   Uuid::new_v4(),
      couple_id:  Uuid::nil(),
      text:       text.into(),
      author:     UNKNOWN_AUTHOR.into(),
      added_by:   Slot::A,
      created_at: Utc::now(),
    }
  }

  #[test]
  fn empty_collection_falls_back() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
      let picked = pick_quote(Vec::new(), &mut rng);
      let QuoteOfTheDay::Fallback(f) = picked else {
        panic!("expected fallback, got {picked:?}");
      };
      assert!(FALLBACK_QUOTES.contains(&f));
    }
  }

  #[test]
  fn picks_only_from_saved_quotes() {
    let mut rng = StdRng::seed_from_u64(42);
    let saved = vec![quote("one"), quote("two"), quote("three")];
    let mut seen = HashSet::new();
    for _ in 0..200 {
      let picked = pick_quote(saved.clone(), &mut rng);
      assert!(matches!(picked, QuoteOfTheDay::Saved(_)));
      seen.insert(picked.text().to_owned());
    }
    let expected: HashSet<String> =
      ["one", "two", "three"].into_iter().map(String::from).collect();
    assert_eq!(seen, expected);
  }

  #[test]
  fn serialises_with_source_tag() {
    let json = serde_json::to_value(QuoteOfTheDay::Fallback(FALLBACK_QUOTES[3]))
      .unwrap();
    assert_eq!(json["source"], "fallback");
    assert_eq!(json["author"], "Bruce Lee");
  }
}
