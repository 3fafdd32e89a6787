/**
 * Password Hashing
 *
 * Thin wrappers around bcrypt so callers do not depend on the hashing
 * crate directly. Hashes are salted by bcrypt itself; verification is
 * constant-time.
 */

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a plaintext password for storage.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Compare a submitted plaintext password against a stored hash.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, stored_hash)
}
