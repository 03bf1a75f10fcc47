/**
 * Password Hashing
 *
 * One-way salted hashing for stored credentials, backed by bcrypt.
 *
 * # Security
 *
 * - A fresh random salt is generated for every call to `hash`
 * - The digest embeds its algorithm identifier, cost factor, and salt, so
 *   stored digests remain verifiable if the default cost changes later
 * - Plaintext passwords are never stored or logged
 */

use bcrypt::{BcryptError, DEFAULT_COST};

/// Hash a plaintext password into a self-describing digest.
pub fn hash(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, DEFAULT_COST)
}

/// Verify a plaintext password against a stored digest.
///
/// Returns `false` for a wrong password; an `Err` means the digest itself
/// could not be parsed.
pub fn verify(plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, digest)
}
