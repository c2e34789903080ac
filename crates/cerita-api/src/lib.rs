//! JSON REST API for CeritaKita.
//!
//! Exposes an axum [`Router`] backed by any
//! [`cerita_core::store::JournalStore`]. TLS and transport concerns are the
//! caller's responsibility. There is no password check: knowing a couple's
//! code and one of its names is enough to act as that participant.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", cerita_api::api_router(store.clone()))
//! ```

pub mod couples;
pub mod error;
pub mod extract;
pub mod health;
pub mod moods;
pub mod quotes;
pub mod sessions;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use cerita_core::store::JournalStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: JournalStore + 'static,
{
  Router::new()
    // Session boundary
    .route("/sessions", post(sessions::create::<S>))
    .route("/codes/suggestion", get(sessions::suggestion))
    .route("/health", get(health::handler::<S>))
    // Couples
    .route("/couples/{couple_id}", get(couples::get_one::<S>))
    .route(
      "/couples/{couple_id}/participants/{slot}/name",
      put(couples::rename::<S>),
    )
    .route(
      "/couples/{couple_id}/participants/{slot}/dashboard",
      get(couples::dashboard::<S>),
    )
    // Moods
    .route(
      "/couples/{couple_id}/participants/{slot}/moods",
      get(moods::history::<S>).post(moods::create::<S>),
    )
    .route(
      "/couples/{couple_id}/participants/{slot}/moods/latest",
      get(moods::latest::<S>),
    )
    // Quotes
    .route(
      "/couples/{couple_id}/participants/{slot}/quotes",
      post(quotes::create::<S>),
    )
    .route("/couples/{couple_id}/quotes", get(quotes::list::<S>))
    .route("/couples/{couple_id}/quotes/random", get(quotes::random::<S>))
    .with_state(store)
}

#[cfg(test)]
mod tests;
