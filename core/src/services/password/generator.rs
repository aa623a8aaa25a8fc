//! Secure random temporary-password generation.
//!
//! Registration and forgot-password issue a temporary password delivered
//! out-of-band via email. Generated values always satisfy the policy in
//! [`validation::password`](crate::validation::password).

use rand::seq::SliceRandom;
use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated temporary passwords
pub const TEMPORARY_PASSWORD_LENGTH: usize = 12;

/// Generates a random temporary password
///
/// Guarantees at least one letter and one digit so the result passes the
/// password-strength policy applied at change-password time.
pub fn generate_temporary_password() -> String {
    let mut rng = rand::thread_rng();

    let mut chars: Vec<u8> = Vec::with_capacity(TEMPORARY_PASSWORD_LENGTH);
    chars.push(*LETTERS.choose(&mut rng).expect("letters are non-empty"));
    chars.push(*DIGITS.choose(&mut rng).expect("digits are non-empty"));
    for _ in 2..TEMPORARY_PASSWORD_LENGTH {
        let idx = rng.gen_range(0..ALPHABET.len());
        chars.push(ALPHABET[idx]);
    }
    chars.shuffle(&mut rng);

    String::from_utf8(chars).expect("alphabet is ASCII")
}
