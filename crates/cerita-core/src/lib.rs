//! Core types and services for CeritaKita, a journal shared by two people.
//!
//! A couple is created by whoever first logs in with an unseen code; the
//! second distinct name to use that code becomes the partner. Every mood and
//! quote is partitioned by the couple's identifier.
//!
//! This crate has no HTTP or database dependencies. Storage backends
//! implement [`store::JournalStore`]; everything else is written against it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod code;
pub mod couple;
pub mod error;
pub mod identity;
pub mod journal;
pub mod mood;
pub mod pairing;
pub mod quote;
pub mod store;

pub use error::{Error, Result};
pub use journal::Journal;
pub use pairing::PairingService;
