//! Handlers for `/couples/{couple_id}` and the per-participant profile.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/couples/{couple_id}` | 404 if not found |
//! | `PUT`  | `/couples/{couple_id}/participants/{slot}/name` | Body: `{"name":"..."}` |
//! | `GET`  | `/couples/{couple_id}/participants/{slot}/dashboard` | Names, latest moods, quote of the day |

use std::sync::Arc;

use axum::{Json, extract::State};
use cerita_core::{
  Journal,
  couple::{Couple, Slot},
  journal::Dashboard,
  store::JournalStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
  error::ApiError,
  extract::{JsonBody, Path},
};

/// `GET /couples/{couple_id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(couple_id): Path<Uuid>,
) -> Result<Json<Couple>, ApiError>
where
  S: JournalStore,
{
  Ok(Json(Journal::new(store).couple(couple_id).await?))
}

#[derive(Debug, Deserialize)]
pub struct RenameBody {
  pub name: String,
}

/// `PUT /couples/{couple_id}/participants/{slot}/name`
pub async fn rename<S>(
  State(store): State<Arc<S>>,
  Path((couple_id, slot)): Path<(Uuid, Slot)>,
  JsonBody(body): JsonBody<RenameBody>,
) -> Result<Json<Couple>, ApiError>
where
  S: JournalStore,
{
  let couple = Journal::new(store)
    .rename(couple_id, slot, &body.name)
    .await?;
  Ok(Json(couple))
}

/// `GET /couples/{couple_id}/participants/{slot}/dashboard`
pub async fn dashboard<S>(
  State(store): State<Arc<S>>,
  Path((couple_id, slot)): Path<(Uuid, Slot)>,
) -> Result<Json<Dashboard>, ApiError>
where
  S: JournalStore,
{
  Ok(Json(Journal::new(store).dashboard(couple_id, slot).await?))
}
