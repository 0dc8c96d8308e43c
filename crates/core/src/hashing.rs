//! Password digest.
//!
//! Passwords are stored as the lowercase hex SHA-512 digest of their UTF-8
//! bytes. There is no salt and no work factor, so equal passwords produce
//! equal digests and a stored digest can be compared directly.

use sha2::{Digest, Sha512};

/// Compute the SHA-512 hex digest of a plaintext password.
pub fn sha512_hex(plaintext: &str) -> String {
    let hash = Sha512::digest(plaintext.as_bytes());
    format!("{hash:x}")
}
