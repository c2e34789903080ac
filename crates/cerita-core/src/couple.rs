//! Couple — the record that binds two participant slots under one code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// One of the two fixed roles inside a couple.
///
/// Slot A belongs to whoever founded the couple; slot B to whoever joined
/// second.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Slot {
  A,
  B,
}

impl Slot {
  /// The other slot of the same couple.
  pub fn partner(self) -> Self {
    match self {
      Self::A => Self::B,
      Self::B => Self::A,
    }
  }
}

/// A paired identity. `participant_b_name` stays `None` until a second
/// distinct name logs in with the same code, and is set exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couple {
  pub couple_id:          Uuid,
  /// Human-chosen join code; unique across the store.
  pub code:               String,
  pub participant_a_name: String,
  pub participant_b_name: Option<String>,
  pub created_at:         DateTime<Utc>,
  /// Bumped on the slot-B bind and on every profile rename.
  pub updated_at:         DateTime<Utc>,
}

impl Couple {
  /// The name occupying `slot`, if any.
  pub fn name_of(&self, slot: Slot) -> Option<&str> {
    match slot {
      Slot::A => Some(self.participant_a_name.as_str()),
      Slot::B => self.participant_b_name.as_deref(),
    }
  }

  /// Which slot `name` occupies. Exact, case-sensitive comparison; slot A
  /// is checked first.
  pub fn slot_of(&self, name: &str) -> Option<Slot> {
    if self.participant_a_name == name {
      Some(Slot::A)
    } else if self.participant_b_name.as_deref() == Some(name) {
      Some(Slot::B)
    } else {
      None
    }
  }

  pub fn is_full(&self) -> bool { self.participant_b_name.is_some() }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn couple(b: Option<&str>) -> Couple {
    let now = Utc::now();
    Couple {
      couple_id:          Uuid::new_v4(),
      code:               "ABC123".into(),
      participant_a_name: "Ana".into(),
      participant_b_name: b.map(str::to_owned),
      created_at:         now,
      updated_at:         now,
    }
  }

  #[test]
  fn slot_of_is_case_sensitive() {
    let c = couple(Some("Budi"));
    assert_eq!(c.slot_of("Ana"), Some(Slot::A));
    assert_eq!(c.slot_of("Budi"), Some(Slot::B));
    assert_eq!(c.slot_of("ana"), None);
    assert_eq!(c.slot_of("Budi "), None);
  }

  #[test]
  fn name_of_vacant_slot_is_none() {
    let c = couple(None);
    assert_eq!(c.name_of(Slot::A), Some("Ana"));
    assert_eq!(c.name_of(Slot::B), None);
    assert!(!c.is_full());
  }

  #[test]
  fn slot_parses_and_displays_lowercase() {
    assert_eq!("a".parse::<Slot>().unwrap(), Slot::A);
    assert_eq!("b".parse::<Slot>().unwrap(), Slot::B);
    assert!("c".parse::<Slot>().is_err());
    assert_eq!(Slot::B.to_string(), "b");
    assert_eq!(Slot::A.partner(), Slot::B);
  }
}
