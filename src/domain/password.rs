//! Salted password hashing and constant-time verification.
//!
//! Stored format is `v1$<salt>$<digest>` where salt is 32 hex chars of fresh
//! random material and digest is the lowercase hex SHA-256 of salt bytes
//! followed by the password bytes. Plaintext never reaches the database.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

const FORMAT_TAG: &str = "v1";

/// Hash `password` under a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{}${}${}", FORMAT_TAG, salt, digest_hex(&salt, password))
}

/// Check `password` against a stored `v1$salt$digest` string.
///
/// The digest comparison is constant-time. Malformed or foreign-format
/// stored values never verify.
pub fn verify_password(stored: &str, password: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    let (tag, salt, digest) = match (parts.next(), parts.next(), parts.next()) {
        (Some(t), Some(s), Some(d)) => (t, s, d),
        _ => return false,
    };
    if tag != FORMAT_TAG {
        return false;
    }
    let candidate = digest_hex(salt, password);
    candidate.as_bytes().ct_eq(digest.as_bytes()).into()
}

fn digest_hex(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
