// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One-way digests of admin passwords.

use thiserror::Error;

/// Password digest errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// The password could not be hashed.
    #[error("Failed to hash password: {0}")]
    Hash(String),

    /// The stored digest could not be checked.
    #[error("Failed to verify password: {0}")]
    Verify(String),
}

/// Hashes `password` with bcrypt at the default cost.
///
/// # Errors
///
/// Returns an error if hashing fails.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Checks `password` against a stored bcrypt digest.
///
/// # Errors
///
/// Returns an error if the digest is malformed.
pub fn verify_password(password: &str, digest: &str) -> Result<bool, PasswordError> {
    bcrypt::verify(password, digest).map_err(|e| PasswordError::Verify(e.to_string()))
}
