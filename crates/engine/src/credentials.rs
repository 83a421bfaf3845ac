//! Credential store: one-way hashing and verification of user secrets.
//!
//! Hashes are Argon2id PHC strings. Nothing outside this module inspects
//! their structure.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::{EngineError, ResultEngine};

/// Hashes a plaintext secret with a fresh random salt.
pub fn hash_secret(secret: &str) -> ResultEngine<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| EngineError::Credential(err.to_string()))
}

/// Returns whether `secret` matches the stored PHC hash.
pub fn verify_secret(secret: &str, stored: &str) -> ResultEngine<bool> {
    let parsed =
        PasswordHash::new(stored).map_err(|err| EngineError::Credential(err.to_string()))?;
    Ok(Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok())
}
