//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with a fixed microsecond
//! precision and a `Z` suffix, so lexical order is chronological order.
//! UUIDs are stored as hyphenated lowercase strings.

use cerita_core::{
  couple::{Couple, Slot},
  mood::{Mood, MoodEntry},
  quote::Quote,
};
use chrono::{DateTime, SecondsFormat, Timelike as _, Utc};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

/// The current time truncated to what [`encode_dt`] keeps, so a value
/// returned from a write compares equal to the same value read back.
pub fn now() -> DateTime<Utc> {
  let now = Utc::now();
  now
    .with_nanosecond(now.nanosecond() / 1_000 * 1_000)
    .unwrap_or(now)
}

// ─── Slot ─────────────────────────────────────────────────────────────────────

pub fn encode_slot(slot: Slot) -> &'static str {
  match slot {
    Slot::A => "a",
    Slot::B => "b",
  }
}

pub fn decode_slot(s: &str) -> Result<Slot> {
  s.parse().map_err(|_| Error::UnknownValue {
    column: "slot",
    value:  s.to_owned(),
  })
}

// ─── Mood ─────────────────────────────────────────────────────────────────────

pub fn encode_mood(mood: Mood) -> String { mood.to_string() }

pub fn decode_mood(s: &str) -> Result<Mood> {
  s.parse().map_err(|_| Error::UnknownValue {
    column: "mood",
    value:  s.to_owned(),
  })
}

// ─── Row types ───────────────────────────────────────────────────────────────

pub const COUPLE_COLUMNS: &str = "couple_id, code, participant_a_name, \
                                  participant_b_name, created_at, updated_at";

/// Raw strings read directly from a `couples` row.
pub struct RawCouple {
  pub couple_id:          String,
  pub code:               String,
  pub participant_a_name: String,
  pub participant_b_name: Option<String>,
  pub created_at:         String,
  pub updated_at:         String,
}

impl RawCouple {
  /// Column order must match [`COUPLE_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      couple_id:          row.get(0)?,
      code:               row.get(1)?,
      participant_a_name: row.get(2)?,
      participant_b_name: row.get(3)?,
      created_at:         row.get(4)?,
      updated_at:         row.get(5)?,
    })
  }

  pub fn into_couple(self) -> Result<Couple> {
    Ok(Couple {
      couple_id:          decode_uuid(&self.couple_id)?,
      code:               self.code,
      participant_a_name: self.participant_a_name,
      participant_b_name: self.participant_b_name,
      created_at:         decode_dt(&self.created_at)?,
      updated_at:         decode_dt(&self.updated_at)?,
    })
  }
}

pub const MOOD_COLUMNS: &str = "mood_id, couple_id, slot, mood, note, created_at";

/// Raw strings read directly from a `moods` row.
pub struct RawMood {
  pub mood_id:    String,
  pub couple_id:  String,
  pub slot:       String,
  pub mood:       String,
  pub note:       String,
  pub created_at: String,
}

impl RawMood {
  /// Column order must match [`MOOD_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      mood_id:    row.get(0)?,
      couple_id:  row.get(1)?,
      slot:       row.get(2)?,
      mood:       row.get(3)?,
      note:       row.get(4)?,
      created_at: row.get(5)?,
    })
  }

  pub fn into_entry(self) -> Result<MoodEntry> {
    Ok(MoodEntry {
      mood_id:    decode_uuid(&self.mood_id)?,
      couple_id:  decode_uuid(&self.couple_id)?,
      slot:       decode_slot(&self.slot)?,
      mood:       decode_mood(&self.mood)?,
      note:       self.note,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

pub const QUOTE_COLUMNS: &str =
  "quote_id, couple_id, text, author, added_by, created_at";

/// Raw strings read directly from a `quotes` row.
pub struct RawQuote {
  pub quote_id:   String,
  pub couple_id:  String,
  pub text:       String,
  pub author:     String,
  pub added_by:   String,
  pub created_at: String,
}

impl RawQuote {
  /// Column order must match [`QUOTE_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      quote_id:   row.get(0)?,
      couple_id:  row.get(1)?,
      text:       row.get(2)?,
      author:     row.get(3)?,
      added_by:   row.get(4)?,
      created_at: row.get(5)?,
    })
  }

  pub fn into_quote(self) -> Result<Quote> {
    Ok(Quote {
      quote_id:   decode_uuid(&self.quote_id)?,
      couple_id:  decode_uuid(&self.couple_id)?,
      text:       self.text,
      author:     self.author,
      added_by:   decode_slot(&self.added_by)?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
