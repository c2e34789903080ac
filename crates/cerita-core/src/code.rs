//! Couple-code suggestions for founders who have not picked one yet.

use rand::Rng;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const SUGGESTED_CODE_LEN: usize = 6;

/// Suggest a random code of uppercase letters and digits. The caller may
/// use it or type its own; nothing is reserved.
pub fn suggest_code<R>(rng: &mut R) -> String
where
  R: Rng + ?Sized,
{
  (0..SUGGESTED_CODE_LEN)
    .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn suggested_code_shape() {
    let mut rng = rand::rng();
    for _ in 0..100 {
      let code = suggest_code(&mut rng);
      assert_eq!(code.len(), SUGGESTED_CODE_LEN);
      assert!(
        code
          .chars()
          .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
      );
    }
  }
}
