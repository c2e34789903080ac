//! Error types for `cerita-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::couple::Slot;

#[derive(Debug, Error)]
pub enum Error {
  /// An input field was empty or outside its allowed set. Re-prompt.
  #[error("invalid input: {0}")]
  Validation(String),

  /// The name matches neither participant and the couple is already full.
  /// A typo and a third person look the same here.
  #[error(
    "name does not match couple code {code:?}, or the couple already has \
     two participants"
  )]
  PairingRejected { code: String },

  #[error("couple not found: {0}")]
  CoupleNotFound(Uuid),

  #[error("slot {slot} of couple {couple_id} has no participant yet")]
  SlotVacant { couple_id: Uuid, slot: Slot },

  #[error("persistence error: {0}")]
  Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Box a backend error into [`Error::Persistence`].
  pub fn persistence<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Persistence(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject empty strings. Whitespace is significant and left untouched.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
  if value.is_empty() {
    return Err(Error::Validation(format!("{field} must not be empty")));
  }
  Ok(())
}
