//! Handlers for quotes.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/couples/{couple_id}/participants/{slot}/quotes` | Body: `{"text":"...","author":"..."}`; returns 201 |
//! | `GET`  | `/couples/{couple_id}/quotes` | Every quote of the couple |
//! | `GET`  | `/couples/{couple_id}/quotes/random` | Tagged `saved` or `fallback` |

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use cerita_core::{
  Journal,
  couple::Slot,
  quote::{Quote, QuoteOfTheDay},
  store::JournalStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
  error::ApiError,
  extract::{JsonBody, Path},
};

#[derive(Debug, Deserialize)]
pub struct NewQuoteBody {
  pub text:   String,
  /// Stored as `"Unknown"` when absent or empty.
  pub author: Option<String>,
}

/// `POST /couples/{couple_id}/participants/{slot}/quotes`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Path((couple_id, slot)): Path<(Uuid, Slot)>,
  JsonBody(body): JsonBody<NewQuoteBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: JournalStore,
{
  let quote = Journal::new(store)
    .add_quote(couple_id, slot, body.text, body.author)
    .await?;
  Ok((StatusCode::CREATED, Json(quote)))
}

/// `GET /couples/{couple_id}/quotes`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Path(couple_id): Path<Uuid>,
) -> Result<Json<Vec<Quote>>, ApiError>
where
  S: JournalStore,
{
  Ok(Json(Journal::new(store).list_quotes(couple_id).await?))
}

/// `GET /couples/{couple_id}/quotes/random`
pub async fn random<S>(
  State(store): State<Arc<S>>,
  Path(couple_id): Path<Uuid>,
) -> Result<Json<QuoteOfTheDay>, ApiError>
where
  S: JournalStore,
{
  Ok(Json(Journal::new(store).random_quote(couple_id).await?))
}
