//! Handlers for `/couples/{couple_id}/participants/{slot}/moods`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `.../moods` | History, newest first |
//! | `POST` | `.../moods` | Body: [`NewMoodBody`]; returns 201 + stored entry |
//! | `GET`  | `.../moods/latest` | 404 if the participant has no entries |

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use cerita_core::{Journal, couple::Slot, mood::MoodEntry, store::JournalStore};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
  error::ApiError,
  extract::{JsonBody, Path},
};

/// JSON body accepted by `POST .../moods`.
#[derive(Debug, Deserialize)]
pub struct NewMoodBody {
  /// Kebab-case name (`"very-happy"`) or the emoji glyph.
  pub mood: String,
  pub note: Option<String>,
}

/// `POST .../moods`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Path((couple_id, slot)): Path<(Uuid, Slot)>,
  JsonBody(body): JsonBody<NewMoodBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: JournalStore,
{
  let entry = Journal::new(store)
    .record_mood(couple_id, slot, &body.mood, body.note)
    .await?;
  Ok((StatusCode::CREATED, Json(entry)))
}

/// `GET .../moods`
pub async fn history<S>(
  State(store): State<Arc<S>>,
  Path((couple_id, slot)): Path<(Uuid, Slot)>,
) -> Result<Json<Vec<MoodEntry>>, ApiError>
where
  S: JournalStore,
{
  Ok(Json(Journal::new(store).mood_history(couple_id, slot).await?))
}

/// `GET .../moods/latest`
pub async fn latest<S>(
  State(store): State<Arc<S>>,
  Path((couple_id, slot)): Path<(Uuid, Slot)>,
) -> Result<Json<MoodEntry>, ApiError>
where
  S: JournalStore,
{
  let entry = Journal::new(store)
    .latest_mood(couple_id, slot)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("no mood recorded for slot {slot}")))?;
  Ok(Json(entry))
}
