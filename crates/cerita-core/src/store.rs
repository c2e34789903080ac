//! The `JournalStore` trait, the seam every storage backend implements.
//!
//! The trait is implemented by storage backends (e.g.
//! `cerita-store-sqlite`). The pairing and journal services depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use serde::Serialize;
use uuid::Uuid;

use crate::{
  couple::{Couple, Slot},
  mood::{MoodEntry, NewMood},
  quote::{NewQuote, Quote},
};

/// What a backend reports about itself when pinged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreInfo {
  pub backend: &'static str,
  pub version: String,
}

/// Abstraction over a CeritaKita store backend.
///
/// Moods and quotes are append-only. The only mutations are the one-time
/// slot-B bind and profile renames on couples.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait JournalStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Round-trip to the backend. Fails if it is unreachable.
  fn ping(&self) -> impl Future<Output = Result<StoreInfo, Self::Error>> + Send + '_;

  // ── Couples ───────────────────────────────────────────────────────────

  fn find_couple_by_code<'a>(
    &'a self,
    code: &'a str,
  ) -> impl Future<Output = Result<Option<Couple>, Self::Error>> + Send + 'a;

  fn get_couple(
    &self,
    couple_id: Uuid,
  ) -> impl Future<Output = Result<Option<Couple>, Self::Error>> + Send + '_;

  /// Create a couple with `founder` in slot A and slot B vacant.
  ///
  /// Returns `None` without writing if another couple already holds
  /// `code`.
  fn create_couple<'a>(
    &'a self,
    code: &'a str,
    founder: &'a str,
  ) -> impl Future<Output = Result<Option<Couple>, Self::Error>> + Send + 'a;

  /// Set `participant_b_name = name` only if it is still null and `name`
  /// differs from slot A's name, as a single conditional update. Returns
  /// `true` if this call performed the bind.
  fn bind_partner<'a>(
    &'a self,
    couple_id: Uuid,
    name: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Overwrite the name in `slot` and bump `updated_at`, as a single
  /// conditional update: the slot must be occupied and `name` must differ
  /// from the other slot's name. Returns the updated couple, or `None` if
  /// nothing was written (unknown couple, vacant slot, or clashing name).
  fn rename_participant<'a>(
    &'a self,
    couple_id: Uuid,
    slot: Slot,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<Couple>, Self::Error>> + Send + 'a;

  // ── Moods ─────────────────────────────────────────────────────────────

  /// Append a mood. `mood_id` and `created_at` are set by the store.
  fn record_mood(
    &self,
    input: NewMood,
  ) -> impl Future<Output = Result<MoodEntry, Self::Error>> + Send + '_;

  /// The entry with the greatest `created_at` for `(couple_id, slot)`.
  fn latest_mood(
    &self,
    couple_id: Uuid,
    slot: Slot,
  ) -> impl Future<Output = Result<Option<MoodEntry>, Self::Error>> + Send + '_;

  /// All entries for `(couple_id, slot)`, newest first.
  fn mood_history(
    &self,
    couple_id: Uuid,
    slot: Slot,
  ) -> impl Future<Output = Result<Vec<MoodEntry>, Self::Error>> + Send + '_;

  // ── Quotes ────────────────────────────────────────────────────────────

  /// Append a quote. `quote_id` and `created_at` are set by the store.
  fn add_quote(
    &self,
    input: NewQuote,
  ) -> impl Future<Output = Result<Quote, Self::Error>> + Send + '_;

  /// Every quote belonging to `couple_id`. Order is not part of the
  /// contract.
  fn list_quotes(
    &self,
    couple_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Quote>, Self::Error>> + Send + '_;
}
