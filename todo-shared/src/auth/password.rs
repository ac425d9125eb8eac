/// Password hashing module using bcrypt
///
/// Passwords are hashed with bcrypt at a fixed work factor of 10 rounds. The
/// salt is generated per hash and embedded in the output, so the stored value
/// is self-describing:
///
/// ```text
/// $2b$10$<22 char salt><31 char hash>
/// ```
///
/// Hashes produced by other bcrypt implementations (`$2a$`, `$2y$`) verify
/// as well, so existing user tables keep working.
///
/// # Example
///
/// ```
/// use todo_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("super_secret_password_123")?;
///
/// assert!(verify_password("super_secret_password_123", &hash)?);
/// assert!(!verify_password("wrong_password", &hash)?);
/// # Ok(())
/// # }
/// ```

/// bcrypt work factor applied to every new hash
pub const HASH_COST: u32 = 10;

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Stored hash could not be parsed
    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),

    /// The blocking hashing task did not complete
    #[error("Password task failed: {0}")]
    TaskFailed(String),
}

/// Hashes a password with a fresh random salt
///
/// # Errors
///
/// Returns `PasswordError::HashError` if bcrypt rejects the input
///
/// # Example
///
/// ```
/// use todo_shared::auth::password::hash_password;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("my_password")?;
/// assert!(hash.starts_with("$2b$10$"));
/// # Ok(())
/// # }
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    bcrypt::hash(password, HASH_COST).map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a password against a stored hash
///
/// Returns `Ok(false)` for a wrong password and an error only when the stored
/// hash itself is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    bcrypt::verify(password, hash).map_err(|e| PasswordError::InvalidHash(e.to_string()))
}

/// Runs [`hash_password`] on the blocking thread pool
///
/// bcrypt at cost 10 takes tens of milliseconds; request handlers use this
/// variant so the async workers keep serving other requests.
pub async fn hash_password_blocking(password: String) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| PasswordError::TaskFailed(e.to_string()))?
}

/// Runs [`verify_password`] on the blocking thread pool
pub async fn verify_password_blocking(
    password: String,
    hash: String,
) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| PasswordError::TaskFailed(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let hash = hash_password("test_password_123").expect("Hash should succeed");

        // Version and cost are encoded in the prefix
        assert!(hash.starts_with("$2b$10$"));
        assert_eq!(hash.len(), 60);
    }

    #[test]
    fn test_hash_password_produces_different_salts() {
        let hash1 = hash_password("same_password").expect("Hash 1 should succeed");
        let hash2 = hash_password("same_password").expect("Hash 2 should succeed");

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_password_correct() {
        let hash = hash_password("correct_password").expect("Hash should succeed");

        let result = verify_password("correct_password", &hash).expect("Verify should succeed");
        assert!(result, "Correct password should verify");
    }

    #[test]
    fn test_verify_password_incorrect() {
        let hash = hash_password("correct_password").expect("Hash should succeed");

        let result = verify_password("wrong_password", &hash).expect("Verify should succeed");
        assert!(!result, "Wrong password should not verify");
    }

    #[test]
    fn test_verify_password_empty() {
        let hash = hash_password("password").expect("Hash should succeed");

        let result = verify_password("", &hash).expect("Verify should succeed");
        assert!(!result, "Empty password should not verify");
    }

    #[test]
    fn test_verify_password_invalid_hash() {
        let result = verify_password("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::InvalidHash(_))));
    }

    #[test]
    fn test_verify_accepts_2a_prefix() {
        // Hashes written by bcryptjs use the $2a$ prefix
        let hash = hash_password("legacy").expect("Hash should succeed");
        let legacy = hash.replacen("$2b$", "$2a$", 1);

        assert!(verify_password("legacy", &legacy).expect("Verify should succeed"));
    }

    #[test]
    fn test_unicode_passwords() {
        for password in ["with spaces", "unicode-密码-パスワード", "with-special-chars!@#$%"] {
            let hash = hash_password(password).expect("Hash should succeed");
            assert!(
                verify_password(password, &hash).expect("Verify should succeed"),
                "Password '{}' should verify",
                password
            );
        }
    }

    #[tokio::test]
    async fn test_blocking_variants() {
        let hash = hash_password_blocking("async_password".to_string())
            .await
            .expect("Hash should succeed");

        let valid = verify_password_blocking("async_password".to_string(), hash.clone())
            .await
            .expect("Verify should succeed");
        assert!(valid);

        let invalid = verify_password_blocking("nope".to_string(), hash)
            .await
            .expect("Verify should succeed");
        assert!(!invalid);
    }
}
