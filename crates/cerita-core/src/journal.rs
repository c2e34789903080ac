//! [`Journal`]: mood, quote and profile operations for a resolved couple.
//!
//! Every operation is scoped by the `couple_id` (and, for per-person data,
//! the `slot`) of an [`Identity`](crate::identity::Identity) the caller
//! obtained from pairing.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::{
  Error, Result,
  couple::{Couple, Slot},
  error::require_non_empty,
  mood::{Mood, MoodEntry, NewMood},
  quote::{NewQuote, Quote, QuoteOfTheDay, UNKNOWN_AUTHOR, pick_quote},
  store::JournalStore,
};

/// Conditional renames retried after the partner's name changed mid-update.
const RENAME_ATTEMPTS: usize = 3;

/// The landing view for one participant.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
  pub name:           String,
  pub partner_name:   Option<String>,
  pub my_mood:        Option<MoodEntry>,
  /// Only looked up once the partner has joined.
  pub partner_mood:   Option<MoodEntry>,
  pub quote_of_today: QuoteOfTheDay,
}

pub struct Journal<S> {
  store: Arc<S>,
}

impl<S> Clone for Journal<S> {
  fn clone(&self) -> Self { Self { store: self.store.clone() } }
}

impl<S: JournalStore> Journal<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  // ── Couples ───────────────────────────────────────────────────────────────

  pub async fn couple(&self, couple_id: Uuid) -> Result<Couple> {
    self
      .store
      .get_couple(couple_id)
      .await
      .map_err(Error::persistence)?
      .ok_or(Error::CoupleNotFound(couple_id))
  }

  /// Change the caller's own display name. Identity (couple and slot) is
  /// unaffected; the next login must use the new name.
  ///
  /// The two names of a couple never become equal: the store applies the
  /// rename only while the partner holds a different name, and a refused
  /// write is re-read to report why.
  pub async fn rename(
    &self,
    couple_id: Uuid,
    slot: Slot,
    name: &str,
  ) -> Result<Couple> {
    require_non_empty("name", name)?;

    for _ in 0..RENAME_ATTEMPTS {
      let couple = self.occupied(couple_id, slot).await?;
      if couple.name_of(slot.partner()) == Some(name) {
        return Err(Error::Validation(format!(
          "{name:?} is already your partner's name"
        )));
      }

      if let Some(renamed) = self
        .store
        .rename_participant(couple_id, slot, name)
        .await
        .map_err(Error::persistence)?
      {
        return Ok(renamed);
      }
      tracing::debug!(%couple_id, %slot, "rename refused by store, re-reading");
    }

    Err(Error::Persistence(
      format!("rename of slot {slot} in couple {couple_id} kept conflicting")
        .into(),
    ))
  }

  // ── Moods ─────────────────────────────────────────────────────────────────

  /// `mood` is a kebab-case name (`"very-happy"`) or its emoji glyph.
  pub async fn record_mood(
    &self,
    couple_id: Uuid,
    slot: Slot,
    mood: &str,
    note: Option<String>,
  ) -> Result<MoodEntry> {
    let mood = Mood::parse(mood)?;
    self.occupied(couple_id, slot).await?;

    let entry = self
      .store
      .record_mood(NewMood {
        couple_id,
        slot,
        mood,
        note: note.unwrap_or_default(),
      })
      .await
      .map_err(Error::persistence)?;
    tracing::debug!(%couple_id, %slot, %mood, "mood recorded");
    Ok(entry)
  }

  pub async fn latest_mood(
    &self,
    couple_id: Uuid,
    slot: Slot,
  ) -> Result<Option<MoodEntry>> {
    self.couple(couple_id).await?;
    self.latest_of(couple_id, slot).await
  }

  /// Newest first.
  pub async fn mood_history(
    &self,
    couple_id: Uuid,
    slot: Slot,
  ) -> Result<Vec<MoodEntry>> {
    self.couple(couple_id).await?;
    self
      .store
      .mood_history(couple_id, slot)
      .await
      .map_err(Error::persistence)
  }

  async fn latest_of(
    &self,
    couple_id: Uuid,
    slot: Slot,
  ) -> Result<Option<MoodEntry>> {
    self
      .store
      .latest_mood(couple_id, slot)
      .await
      .map_err(Error::persistence)
  }

  // ── Quotes ────────────────────────────────────────────────────────────────

  /// A missing or empty `author` is stored as [`UNKNOWN_AUTHOR`].
  pub async fn add_quote(
    &self,
    couple_id: Uuid,
    slot: Slot,
    text: String,
    author: Option<String>,
  ) -> Result<Quote> {
    require_non_empty("quote", &text)?;
    self.occupied(couple_id, slot).await?;

    let author = author
      .filter(|a| !a.is_empty())
      .unwrap_or_else(|| UNKNOWN_AUTHOR.to_owned());

    self
      .store
      .add_quote(NewQuote { couple_id, text, author, added_by: slot })
      .await
      .map_err(Error::persistence)
  }

  pub async fn list_quotes(&self, couple_id: Uuid) -> Result<Vec<Quote>> {
    self.couple(couple_id).await?;
    self.quotes_of(couple_id).await
  }

  /// A uniformly random saved quote, or a built-in one if there are none.
  pub async fn random_quote(&self, couple_id: Uuid) -> Result<QuoteOfTheDay> {
    self.couple(couple_id).await?;
    self.pick_for(couple_id).await
  }

  async fn quotes_of(&self, couple_id: Uuid) -> Result<Vec<Quote>> {
    self
      .store
      .list_quotes(couple_id)
      .await
      .map_err(Error::persistence)
  }

  async fn pick_for(&self, couple_id: Uuid) -> Result<QuoteOfTheDay> {
    let quotes = self.quotes_of(couple_id).await?;
    Ok(pick_quote(quotes, &mut rand::rng()))
  }

  // ── Dashboard ─────────────────────────────────────────────────────────────

  /// Read fresh from the store, so a partner who joined mid-session shows
  /// up.
  pub async fn dashboard(&self, couple_id: Uuid, slot: Slot) -> Result<Dashboard> {
    let couple = self.occupied(couple_id, slot).await?;
    let partner_name = couple.name_of(slot.partner()).map(str::to_owned);

    let my_mood = self.latest_of(couple_id, slot).await?;
    let partner_mood = match partner_name {
      Some(_) => self.latest_of(couple_id, slot.partner()).await?,
      None => None,
    };
    let quote_of_today = self.pick_for(couple_id).await?;

    Ok(Dashboard {
      name: couple.name_of(slot).unwrap_or_default().to_owned(),
      partner_name,
      my_mood,
      partner_mood,
      quote_of_today,
    })
  }

  /// Fetch the couple and check that `slot` has a participant.
  async fn occupied(&self, couple_id: Uuid, slot: Slot) -> Result<Couple> {
    let couple = self.couple(couple_id).await?;
    if couple.name_of(slot).is_none() {
      return Err(Error::SlotVacant { couple_id, slot });
    }
    Ok(couple)
  }
}
