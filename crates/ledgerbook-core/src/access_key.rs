//! Access-key generation for ledger sharing.

use rand::Rng;

/// Alphabet the key is drawn from: 62 alphanumeric symbols.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a generated access key.
const KEY_LEN: usize = 10;

/// Generate a random 10-character access key.
///
/// Keys are drawn uniformly from `[A-Za-z0-9]`. Uniqueness is enforced by
/// the database constraint, not checked here; with 62^10 possible keys a
/// collision on insert is vanishingly rare.
#[must_use]
pub fn generate_access_key() -> String {
    let mut rng = rand::thread_rng();
    (0..KEY_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            char::from(ALPHABET[idx])
        })
        .collect()
}
