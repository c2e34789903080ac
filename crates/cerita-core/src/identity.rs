//! The session identity produced by pairing.
//!
//! An [`Identity`] is never persisted. Callers hold it for one session and
//! pass its `couple_id` and `slot` into every journal operation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::couple::Slot;

/// Who the caller is within their couple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
  pub couple_id:    Uuid,
  pub code:         String,
  pub slot:         Slot,
  pub name:         String,
  /// `None` while the partner has not joined yet.
  pub partner_name: Option<String>,
}

/// Which path a successful resolve took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingOutcome {
  /// No couple held the code; a new one was created with the caller in A.
  Founded,
  /// The caller was bound into the vacant slot B by this call.
  Joined,
  /// The caller's name already occupied a slot.
  Returned,
}

/// Output of [`crate::PairingService::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
  #[serde(flatten)]
  pub identity: Identity,
  pub outcome:  PairingOutcome,
}
