/// Bearer token issuing and verification
///
/// Tokens are HS256-signed JWTs carrying the user's id and username. Every
/// token expires one hour after it is issued.
///
/// # Security
///
/// - **Algorithm**: HS256 (HMAC with SHA-256), the only algorithm accepted
/// - **Expiration**: 1 hour, checked with zero leeway
/// - **Secret Management**: the server-wide secret comes from configuration
///
/// # Example
///
/// ```
/// use todo_shared::auth::jwt::{issue_token, verify_token};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let token = issue_token(42, "alice", "your-secret-key")?;
///
/// let claims = verify_token(&token, "your-secret-key")?;
/// assert_eq!(claims.id, 42);
/// assert_eq!(claims.username, "alice");
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Error type for token operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Signature, format or claims are not acceptable
    #[error("Invalid token: {0}")]
    Invalid(String),
}

/// Token claims
///
/// # Claims
///
/// - `id`: User ID
/// - `username`: Username at the time of issuance
/// - `iat`: Issued at (Unix timestamp)
/// - `exp`: Expiration (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: i64,

    /// Username
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Lifetime of every issued token
    pub fn lifetime() -> Duration {
        Duration::hours(1)
    }

    /// Creates claims expiring one hour from now
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        Self::with_expiration(user_id, username, Self::lifetime())
    }

    /// Creates claims with a custom expiration
    ///
    /// A negative `expires_in` yields claims that are already expired.
    pub fn with_expiration(user_id: i64, username: impl Into<String>, expires_in: Duration) -> Self {
        let now = Utc::now();

        Self {
            id: user_id,
            username: username.into(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }

    /// Checks expiry against a given Unix timestamp
    ///
    /// The `exp` second itself is still valid, matching [`verify_token`].
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.exp
    }
}

/// Signs claims into a token string
///
/// # Errors
///
/// Returns `JwtError::CreateError` if encoding fails
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Issues a one-hour token for a user
///
/// # Example
///
/// ```
/// use todo_shared::auth::jwt::issue_token;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let token = issue_token(1, "alice", "secret")?;
/// assert_eq!(token.split('.').count(), 3);
/// # Ok(())
/// # }
/// ```
pub fn issue_token(user_id: i64, username: &str, secret: &str) -> Result<String, JwtError> {
    create_token(&Claims::new(user_id, username), secret)
}

/// Verifies a token and extracts its claims
///
/// Verifies:
/// - Signature matches the secret
/// - Algorithm is HS256
/// - Token hasn't expired (no leeway)
///
/// # Errors
///
/// `JwtError::Expired` for a stale token, `JwtError::Invalid` for anything
/// else (bad signature, garbage input, missing claims).
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        _ => JwtError::Invalid(e.to_string()),
    })?;

    Ok(token_data.claims)
}
