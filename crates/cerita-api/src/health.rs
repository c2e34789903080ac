//! `GET /health`: pings the store and reports what answered.

use std::sync::Arc;

use axum::{Json, extract::State};
use cerita_core::store::{JournalStore, StoreInfo};

use crate::error::ApiError;

pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<StoreInfo>, ApiError>
where
  S: JournalStore,
{
  let info = store
    .ping()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(info))
}
