//! Password hashing with Argon2id and a random per-password salt.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::{AccountError, AccountResult};

/// Hash a raw password into a PHC string
pub fn hash_password(password: &str) -> AccountResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccountError::PasswordHash(e.to_string()))
}

/// Check a raw password against a stored PHC string
pub fn verify_password(password: &str, hash: &str) -> AccountResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| AccountError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
