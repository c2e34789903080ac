//! [`PairingService`] turns a `(code, name)` pair into an [`Identity`].
//!
//! | Couple state            | Name matches | Result                      |
//! |-------------------------|--------------|-----------------------------|
//! | no couple holds `code`  | –            | create couple, slot A       |
//! | any                     | slot A       | slot A                      |
//! | any                     | slot B       | slot B                      |
//! | slot B vacant           | neither      | bind name into B, slot B    |
//! | both slots filled       | neither      | [`Error::PairingRejected`]  |
//!
//! Names are compared exactly; no trimming or case folding.

use std::sync::Arc;

use crate::{
  Error, Result,
  couple::{Couple, Slot},
  error::require_non_empty,
  identity::{Identity, PairingOutcome, Resolution},
  store::JournalStore,
};

/// Resolves login attempts against a [`JournalStore`].
///
/// Performs at most one write per call: the couple insert or the slot-B
/// bind. Every other path is a read.
pub struct PairingService<S> {
  store: Arc<S>,
}

impl<S> Clone for PairingService<S> {
  fn clone(&self) -> Self { Self { store: self.store.clone() } }
}

impl<S: JournalStore> PairingService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn resolve(&self, code: &str, name: &str) -> Result<Resolution> {
    require_non_empty("couple code", code)?;
    require_non_empty("name", name)?;

    let couple = match self.find(code).await? {
      Some(couple) => couple,
      None => match self
        .store
        .create_couple(code, name)
        .await
        .map_err(Error::persistence)?
      {
        Some(created) => {
          tracing::info!(
            couple_id = %created.couple_id,
            slot = %Slot::A,
            "founded couple"
          );
          return Ok(resolution(&created, Slot::A, PairingOutcome::Founded));
        }
        // Another founder inserted the same code between our read and our
        // insert; resolve against their record.
        None => self.find(code).await?.ok_or_else(|| {
          Error::Persistence(
            format!("couple with code {code:?} vanished after insert conflict")
              .into(),
          )
        })?,
      },
    };

    if let Some(slot) = couple.slot_of(name) {
      return Ok(resolution(&couple, slot, PairingOutcome::Returned));
    }

    if couple.is_full() {
      return Err(reject(&couple, code));
    }

    let bound = self
      .store
      .bind_partner(couple.couple_id, name)
      .await
      .map_err(Error::persistence)?;

    if bound {
      let mut joined = couple;
      joined.participant_b_name = Some(name.to_owned());
      tracing::info!(
        couple_id = %joined.couple_id,
        slot = %Slot::B,
        "partner joined couple"
      );
      return Ok(resolution(&joined, Slot::B, PairingOutcome::Joined));
    }

    // The bind did not apply: slot B was taken first, or slot A was renamed
    // to this name in the meantime. Only a same-name slot B (a retried
    // request) makes the caller a known participant.
    let current = self
      .store
      .get_couple(couple.couple_id)
      .await
      .map_err(Error::persistence)?
      .ok_or(Error::CoupleNotFound(couple.couple_id))?;
    if current.name_of(Slot::B) == Some(name) {
      return Ok(resolution(&current, Slot::B, PairingOutcome::Returned));
    }
    Err(reject(&current, code))
  }

  async fn find(&self, code: &str) -> Result<Option<Couple>> {
    self
      .store
      .find_couple_by_code(code)
      .await
      .map_err(Error::persistence)
  }
}

fn resolution(couple: &Couple, slot: Slot, outcome: PairingOutcome) -> Resolution {
  // `slot` is always an occupied slot here.
  let identity = Identity {
    couple_id:    couple.couple_id,
    code:         couple.code.clone(),
    slot,
    name:         couple.name_of(slot).unwrap_or_default().to_owned(),
    partner_name: couple.name_of(slot.partner()).map(str::to_owned),
  };
  Resolution { identity, outcome }
}

/// The rejected claim is always a claim on slot B.
fn reject(couple: &Couple, code: &str) -> Error {
  tracing::info!(
    couple_id = %couple.couple_id,
    slot = %Slot::B,
    "pairing rejected"
  );
  Error::PairingRejected { code: code.to_owned() }
}
