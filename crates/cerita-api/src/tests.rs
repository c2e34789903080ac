//! Router tests against an in-memory SQLite store.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
};
use cerita_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn make_store() -> Arc<SqliteStore> {
  Arc::new(SqliteStore::open_in_memory().await.unwrap())
}

async fn send(
  store:  Arc<SqliteStore>,
  method: &str,
  uri:    &str,
  body:   Option<Value>,
) -> (StatusCode, Value) {
  let builder = Request::builder().method(method).uri(uri);
  let req = match body {
    Some(json) => builder
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(json.to_string()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };

  let resp = api_router(store).oneshot(req).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, value)
}

async fn login(store: &Arc<SqliteStore>, code: &str, name: &str) -> Value {
  let (status, body) = send(
    store.clone(),
    "POST",
    "/sessions",
    Some(json!({ "code": code, "name": name })),
  )
  .await;
  assert_eq!(status, StatusCode::OK, "login failed: {body}");
  body
}

// ── Sessions ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn login_scenario() {
  let store = make_store().await;

  let ana = login(&store, "ABC123", "Ana").await;
  assert_eq!(ana["slot"], "a");
  assert_eq!(ana["outcome"], "founded");
  assert_eq!(ana["partner_name"], Value::Null);

  let budi = login(&store, "ABC123", "Budi").await;
  assert_eq!(budi["slot"], "b");
  assert_eq!(budi["outcome"], "joined");
  assert_eq!(budi["partner_name"], "Ana");
  assert_eq!(budi["couple_id"], ana["couple_id"]);

  let again = login(&store, "ABC123", "Ana").await;
  assert_eq!(again["outcome"], "returned");
  assert_eq!(again["partner_name"], "Budi");

  let (status, body) = send(
    store,
    "POST",
    "/sessions",
    Some(json!({ "code": "ABC123", "name": "Citra" })),
  )
  .await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert!(body["error"].as_str().unwrap().contains("ABC123"));
}

#[tokio::test]
async fn login_with_empty_name_is_bad_request() {
  let store = make_store().await;
  let (status, body) = send(
    store,
    "POST",
    "/sessions",
    Some(json!({ "code": "ABC123", "name": "" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn code_suggestion_has_six_characters() {
  let store = make_store().await;
  let (status, body) = send(store, "GET", "/codes/suggestion", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["code"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn health_reports_backend() {
  let store = make_store().await;
  let (status, body) = send(store, "GET", "/health", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["backend"], "sqlite");
}

// ── Couples ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_unknown_couple_returns_404() {
  let store = make_store().await;
  let uri = format!("/couples/{}", uuid::Uuid::new_v4());
  let (status, _) = send(store, "GET", &uri, None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rename_updates_profile() {
  let store = make_store().await;
  let ana = login(&store, "ABC123", "Ana").await;
  let id = ana["couple_id"].as_str().unwrap();

  let (status, couple) = send(
    store.clone(),
    "PUT",
    &format!("/couples/{id}/participants/a/name"),
    Some(json!({ "name": "Anastasia" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(couple["participant_a_name"], "Anastasia");
  assert_eq!(couple["code"], "ABC123");

  let (_, fetched) = send(store, "GET", &format!("/couples/{id}"), None).await;
  assert_eq!(fetched["participant_a_name"], "Anastasia");
}

#[tokio::test]
async fn invalid_slot_in_path_is_rejected() {
  let store = make_store().await;
  let ana = login(&store, "ABC123", "Ana").await;
  let id = ana["couple_id"].as_str().unwrap();

  let (status, body) = send(
    store,
    "GET",
    &format!("/couples/{id}/participants/c/moods"),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("unknown variant"));
}

#[tokio::test]
async fn malformed_couple_id_is_json_bad_request() {
  let store = make_store().await;
  let (status, body) = send(store, "GET", "/couples/not-a-uuid", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn login_missing_field_is_json_bad_request() {
  let store = make_store().await;
  let (status, body) = send(
    store,
    "POST",
    "/sessions",
    Some(json!({ "code": "ABC123" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("name"));
}

// ── Moods ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn record_and_read_moods() {
  let store = make_store().await;
  let ana = login(&store, "ABC123", "Ana").await;
  let base = format!(
    "/couples/{}/participants/a",
    ana["couple_id"].as_str().unwrap()
  );

  let (status, _) = send(store.clone(), "GET", &format!("{base}/moods/latest"), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, created) = send(
    store.clone(),
    "POST",
    &format!("{base}/moods"),
    Some(json!({ "mood": "happy", "note": "great day" })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(created["mood"], "happy");
  assert_eq!(created["emoji"], "😊");
  assert_eq!(created["label"], "Senang");
  assert_eq!(created["score"], 2);
  assert_eq!(created["slot"], "a");

  let (status, history) = send(store.clone(), "GET", &format!("{base}/moods"), None).await;
  assert_eq!(status, StatusCode::OK);
  let history = history.as_array().unwrap();
  assert_eq!(history.len(), 1);
  assert_eq!(history[0]["mood"], "happy");

  let (status, latest) = send(store, "GET", &format!("{base}/moods/latest"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(latest["mood_id"], created["mood_id"]);
}

#[tokio::test]
async fn unknown_mood_is_bad_request() {
  let store = make_store().await;
  let ana = login(&store, "ABC123", "Ana").await;
  let uri = format!(
    "/couples/{}/participants/a/moods",
    ana["couple_id"].as_str().unwrap()
  );

  let (status, _) = send(store, "POST", &uri, Some(json!({ "mood": "furious" }))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mood_for_vacant_slot_is_conflict() {
  let store = make_store().await;
  let ana = login(&store, "ABC123", "Ana").await;
  let uri = format!(
    "/couples/{}/participants/b/moods",
    ana["couple_id"].as_str().unwrap()
  );

  let (status, _) = send(store, "POST", &uri, Some(json!({ "mood": "sad" }))).await;
  assert_eq!(status, StatusCode::CONFLICT);
}

// ── Quotes ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn quotes_are_scoped_to_their_couple() {
  let store = make_store().await;
  let ours = login(&store, "OURS", "Ana").await;
  let theirs = login(&store, "THEIRS", "Dewi").await;
  let ours_id = ours["couple_id"].as_str().unwrap();
  let theirs_id = theirs["couple_id"].as_str().unwrap();

  let (status, created) = send(
    store.clone(),
    "POST",
    &format!("/couples/{ours_id}/participants/a/quotes"),
    Some(json!({ "text": "Love is patient" })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(created["author"], "Unknown");
  assert_eq!(created["added_by"], "a");

  let (_, listed) = send(
    store.clone(),
    "GET",
    &format!("/couples/{ours_id}/quotes"),
    None,
  )
  .await;
  assert_eq!(listed.as_array().unwrap().len(), 1);

  let (_, other) = send(
    store.clone(),
    "GET",
    &format!("/couples/{theirs_id}/quotes"),
    None,
  )
  .await;
  assert!(other.as_array().unwrap().is_empty());

  let (status, random) = send(
    store,
    "GET",
    &format!("/couples/{theirs_id}/quotes/random"),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(random["source"], "fallback");
}

#[tokio::test]
async fn reads_for_unknown_couple_are_404() {
  let store = make_store().await;
  let ghost = uuid::Uuid::new_v4();

  for uri in [
    format!("/couples/{ghost}/quotes"),
    format!("/couples/{ghost}/quotes/random"),
    format!("/couples/{ghost}/participants/a/moods"),
    format!("/couples/{ghost}/participants/a/moods/latest"),
  ] {
    let (status, body) = send(store.clone(), "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    assert!(body["error"].is_string());
  }
}

#[tokio::test]
async fn dashboard_lists_both_participants() {
  let store = make_store().await;
  let ana = login(&store, "ABC123", "Ana").await;
  login(&store, "ABC123", "Budi").await;
  let id = ana["couple_id"].as_str().unwrap();

  send(
    store.clone(),
    "POST",
    &format!("/couples/{id}/participants/b/moods"),
    Some(json!({ "mood": "😍" })),
  )
  .await;

  let (status, board) = send(
    store,
    "GET",
    &format!("/couples/{id}/participants/a/dashboard"),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(board["name"], "Ana");
  assert_eq!(board["partner_name"], "Budi");
  assert_eq!(board["my_mood"], Value::Null);
  assert_eq!(board["partner_mood"]["mood"], "very-happy");
  assert_eq!(board["partner_mood"]["emoji"], "😍");
  assert_eq!(board["partner_mood"]["score"], 1);
  assert!(board["quote_of_today"]["text"].is_string());
}
