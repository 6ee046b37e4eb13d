//! Password hashing and verification utilities
//!
//! Uses Argon2id for secure password hashing (OWASP recommended).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Validate password strength
///
/// Requirements: at least 8 characters, one uppercase letter, one lowercase
/// letter, one digit.
///
/// # Errors
/// Returns a validation error naming the first unmet requirement
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    if password.len() < 8 {
        return Err(AppError::validation("Password must be at least 8 characters"));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AppError::validation("Password must contain an uppercase letter"));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(AppError::validation("Password must contain a lowercase letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::validation("Password must contain a digit"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Sup3rSecret").unwrap();
        assert!(verify_password("Sup3rSecret", &hash).unwrap());
        assert!(!verify_password("WrongPass1", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("Sup3rSecret").unwrap();
        let b = hash_password("Sup3rSecret").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_errors() {
        assert!(verify_password("anything", "not-a-hash").is_err());
    }

    #[test]
    fn test_strength_requirements() {
        assert!(validate_password_strength("Sup3rSecret").is_ok());
        assert!(validate_password_strength("short1A").is_err());
        assert!(validate_password_strength("alllowercase1").is_err());
        assert!(validate_password_strength("ALLUPPERCASE1").is_err());
        assert!(validate_password_strength("NoDigitsHere").is_err());
    }
}
