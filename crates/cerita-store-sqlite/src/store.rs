//! [`SqliteStore`] — the SQLite implementation of [`JournalStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use cerita_core::{
  couple::{Couple, Slot},
  mood::{MoodEntry, NewMood},
  quote::{NewQuote, Quote},
  store::{JournalStore, StoreInfo},
};

use crate::{
  encode::{
    COUPLE_COLUMNS, MOOD_COLUMNS, QUOTE_COLUMNS, RawCouple, RawMood, RawQuote,
    encode_dt, encode_mood, encode_slot, encode_uuid, now,
  },
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A CeritaKita store backed by a single SQLite file.
///
/// The inner connection is reference-counted, so clones share it.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store. Used by tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn couple_where(
    &self,
    column: &'static str,
    value: String,
  ) -> Result<Option<Couple>> {
    let raw: Option<RawCouple> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {COUPLE_COLUMNS} FROM couples WHERE {column} = ?1"),
            rusqlite::params![value],
            RawCouple::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawCouple::into_couple).transpose()
  }
}

// ─── JournalStore impl ───────────────────────────────────────────────────────

impl JournalStore for SqliteStore {
  type Error = crate::Error;

  async fn ping(&self) -> Result<StoreInfo> {
    let version: String = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT sqlite_version()", [], |row| row.get(0))?)
      })
      .await?;
    Ok(StoreInfo { backend: "sqlite", version })
  }

  // ── Couples ───────────────────────────────────────────────────────────────

  async fn find_couple_by_code(&self, code: &str) -> Result<Option<Couple>> {
    self.couple_where("code", code.to_owned()).await
  }

  async fn get_couple(&self, couple_id: Uuid) -> Result<Option<Couple>> {
    self.couple_where("couple_id", encode_uuid(couple_id)).await
  }

  async fn create_couple(
    &self,
    code: &str,
    founder: &str,
  ) -> Result<Option<Couple>> {
    let created_at = now();
    let couple = Couple {
      couple_id:          Uuid::new_v4(),
      code:               code.to_owned(),
      participant_a_name: founder.to_owned(),
      participant_b_name: None,
      created_at,
      updated_at:         created_at,
    };

    let id_str   = encode_uuid(couple.couple_id);
    let code_str = couple.code.clone();
    let name_str = couple.participant_a_name.clone();
    let at_str   = encode_dt(created_at);

    let inserted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "INSERT INTO couples (
             couple_id, code, participant_a_name, participant_b_name,
             created_at, updated_at
           ) VALUES (?1, ?2, ?3, NULL, ?4, ?4)
           ON CONFLICT (code) DO NOTHING",
          rusqlite::params![id_str, code_str, name_str, at_str],
        )?)
      })
      .await?;

    if inserted == 0 {
      tracing::debug!(code, "couple code already taken");
      return Ok(None);
    }
    Ok(Some(couple))
  }

  async fn bind_partner(&self, couple_id: Uuid, name: &str) -> Result<bool> {
    let id_str   = encode_uuid(couple_id);
    let name_str = name.to_owned();
    let at_str   = encode_dt(now());

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE couples
           SET participant_b_name = ?2, updated_at = ?3
           WHERE couple_id = ?1
             AND participant_b_name IS NULL
             AND participant_a_name <> ?2",
          rusqlite::params![id_str, name_str, at_str],
        )?)
      })
      .await?;

    Ok(changed == 1)
  }

  async fn rename_participant(
    &self,
    couple_id: Uuid,
    slot: Slot,
    name: &str,
  ) -> Result<Option<Couple>> {
    // The two names must stay distinct, checked in the same statement that
    // writes so a concurrent bind or rename cannot slip in between.
    let sql = match slot {
      Slot::A => {
        "UPDATE couples SET participant_a_name = ?2, updated_at = ?3
         WHERE couple_id = ?1 AND participant_b_name IS NOT ?2"
      }
      Slot::B => {
        "UPDATE couples SET participant_b_name = ?2, updated_at = ?3
         WHERE couple_id = ?1
           AND participant_b_name IS NOT NULL
           AND participant_a_name <> ?2"
      }
    };
    let id_str   = encode_uuid(couple_id);
    let name_str = name.to_owned();
    let at_str   = encode_dt(now());

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(sql, rusqlite::params![id_str, name_str, at_str])?)
      })
      .await?;

    if changed == 0 {
      return Ok(None);
    }
    self.get_couple(couple_id).await
  }

  // ── Moods ─────────────────────────────────────────────────────────────────

  async fn record_mood(&self, input: NewMood) -> Result<MoodEntry> {
    let entry = MoodEntry {
      mood_id:    Uuid::new_v4(),
      couple_id:  input.couple_id,
      slot:       input.slot,
      mood:       input.mood,
      note:       input.note,
      created_at: now(),
    };

    let id_str     = encode_uuid(entry.mood_id);
    let couple_str = encode_uuid(entry.couple_id);
    let slot_str   = encode_slot(entry.slot);
    let mood_str   = encode_mood(entry.mood);
    let note       = entry.note.clone();
    let at_str     = encode_dt(entry.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO moods (mood_id, couple_id, slot, mood, note, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, couple_str, slot_str, mood_str, note, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(entry)
  }

  async fn latest_mood(
    &self,
    couple_id: Uuid,
    slot: Slot,
  ) -> Result<Option<MoodEntry>> {
    let couple_str = encode_uuid(couple_id);
    let slot_str   = encode_slot(slot);

    let raw: Option<RawMood> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "SELECT {MOOD_COLUMNS} FROM moods
               WHERE couple_id = ?1 AND slot = ?2
               ORDER BY created_at DESC, rowid DESC
               LIMIT 1"
            ),
            rusqlite::params![couple_str, slot_str],
            RawMood::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawMood::into_entry).transpose()
  }

  async fn mood_history(
    &self,
    couple_id: Uuid,
    slot: Slot,
  ) -> Result<Vec<MoodEntry>> {
    let couple_str = encode_uuid(couple_id);
    let slot_str   = encode_slot(slot);

    let raws: Vec<RawMood> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {MOOD_COLUMNS} FROM moods
           WHERE couple_id = ?1 AND slot = ?2
           ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![couple_str, slot_str], RawMood::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawMood::into_entry).collect()
  }

  // ── Quotes ────────────────────────────────────────────────────────────────

  async fn add_quote(&self, input: NewQuote) -> Result<Quote> {
    let quote = Quote {
      quote_id:   Uuid::new_v4(),
      couple_id:  input.couple_id,
      text:       input.text,
      author:     input.author,
      added_by:   input.added_by,
      created_at: now(),
    };

    let id_str     = encode_uuid(quote.quote_id);
    let couple_str = encode_uuid(quote.couple_id);
    let text       = quote.text.clone();
    let author     = quote.author.clone();
    let slot_str   = encode_slot(quote.added_by);
    let at_str     = encode_dt(quote.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO quotes (quote_id, couple_id, text, author, added_by, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, couple_str, text, author, slot_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(quote)
  }

  async fn list_quotes(&self, couple_id: Uuid) -> Result<Vec<Quote>> {
    let couple_str = encode_uuid(couple_id);

    let raws: Vec<RawQuote> = self
      .conn
      .call(move |conn| {
        // Newest first, as the collection view shows them.
        let mut stmt = conn.prepare(&format!(
          "SELECT {QUOTE_COLUMNS} FROM quotes
           WHERE couple_id = ?1
           ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![couple_str], RawQuote::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawQuote::into_quote).collect()
  }
}
