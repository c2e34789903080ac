//! Handlers for the session boundary.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/sessions` | Body: `{"code":"...","name":"..."}`; returns the resolved identity |
//! | `GET`  | `/codes/suggestion` | A random code a founder may use |
//!
//! Nothing is stored server-side. The client keeps the returned
//! `couple_id` and `slot` and sends them back in every later path.

use std::sync::Arc;

use axum::{Json, extract::State};
use cerita_core::{
  PairingService, code::suggest_code, identity::Resolution, store::JournalStore,
};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, extract::JsonBody};

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub code: String,
  pub name: String,
}

/// `POST /sessions`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  JsonBody(body): JsonBody<LoginBody>,
) -> Result<Json<Resolution>, ApiError>
where
  S: JournalStore,
{
  let resolution = PairingService::new(store)
    .resolve(&body.code, &body.name)
    .await?;
  Ok(Json(resolution))
}

#[derive(Debug, Serialize)]
pub struct Suggestion {
  pub code: String,
}

/// `GET /codes/suggestion`
pub async fn suggestion() -> Json<Suggestion> {
  Json(Suggestion { code: suggest_code(&mut rand::rng()) })
}
