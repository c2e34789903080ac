//! Mood entries, the append-only daily log each participant keeps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use uuid::Uuid;

use crate::{Error, Result, couple::Slot};

/// The fixed mood scale. Parses from either the kebab-case name or the
/// emoji glyph; displays as the name.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
  #[strum(to_string = "very-happy", serialize = "😍")]
  VeryHappy,
  #[strum(to_string = "happy", serialize = "😊")]
  Happy,
  #[strum(to_string = "neutral", serialize = "😐")]
  Neutral,
  #[strum(to_string = "sad", serialize = "😔")]
  Sad,
  #[strum(to_string = "very-sad", serialize = "😢")]
  VerySad,
}

impl Mood {
  pub fn emoji(self) -> &'static str {
    match self {
      Self::VeryHappy => "😍",
      Self::Happy => "😊",
      Self::Neutral => "😐",
      Self::Sad => "😔",
      Self::VerySad => "😢",
    }
  }

  /// Indonesian label shown next to the glyph.
  pub fn label(self) -> &'static str {
    match self {
      Self::VeryHappy => "Sangat Bahagia",
      Self::Happy => "Senang",
      Self::Neutral => "Biasa saja",
      Self::Sad => "Sedih",
      Self::VerySad => "Sangat Sedih",
    }
  }

  /// Position on the history chart: 1 is the happiest, 5 the saddest.
  pub fn score(self) -> u8 {
    match self {
      Self::VeryHappy => 1,
      Self::Happy => 2,
      Self::Neutral => 3,
      Self::Sad => 4,
      Self::VerySad => 5,
    }
  }

  /// Parse user input, mapping failure to [`Error::Validation`].
  pub fn parse(input: &str) -> Result<Self> {
    input.parse().map_err(|_| {
      let allowed: Vec<String> = Self::iter().map(|m| m.to_string()).collect();
      Error::Validation(format!(
        "unknown mood {input:?}; expected one of {}",
        allowed.join(", ")
      ))
    })
  }
}

/// A recorded mood. Never updated or deleted.
///
/// Serialises with the mood's `emoji`, `label` and `score` alongside the
/// stored fields, so clients can render the glyph and chart directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "MoodEntryJson")]
pub struct MoodEntry {
  pub mood_id:    Uuid,
  pub couple_id:  Uuid,
  pub slot:       Slot,
  pub mood:       Mood,
  /// Empty when the participant wrote nothing.
  pub note:       String,
  /// Server-assigned.
  pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct MoodEntryJson {
  mood_id:    Uuid,
  couple_id:  Uuid,
  slot:       Slot,
  mood:       Mood,
  emoji:      &'static str,
  label:      &'static str,
  score:      u8,
  note:       String,
  created_at: DateTime<Utc>,
}

impl From<MoodEntry> for MoodEntryJson {
  fn from(e: MoodEntry) -> Self {
    Self {
      mood_id:    e.mood_id,
      couple_id:  e.couple_id,
      slot:       e.slot,
      mood:       e.mood,
      emoji:      e.mood.emoji(),
      label:      e.mood.label(),
      score:      e.mood.score(),
      note:       e.note,
      created_at: e.created_at,
    }
  }
}

/// Input to [`crate::store::JournalStore::record_mood`].
/// `mood_id` and `created_at` are always set by the store.
#[derive(Debug, Clone)]
pub struct NewMood {
  pub couple_id: Uuid,
  pub slot:      Slot,
  pub mood:      Mood,
  pub note:      String,
}
