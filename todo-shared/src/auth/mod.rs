/// Authentication utilities
///
/// # Modules
///
/// - [`password`]: bcrypt password hashing and verification
/// - [`jwt`]: Bearer token issuing and verification
/// - [`middleware`]: Authorization header parsing and the authenticated identity
///
/// # Example
///
/// ```no_run
/// use todo_shared::auth::password::{hash_password, verify_password};
/// use todo_shared::auth::jwt::{issue_token, verify_token};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let token = issue_token(1, "alice", "server-secret")?;
/// let claims = verify_token(&token, "server-secret")?;
/// assert_eq!(claims.username, "alice");
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;
pub mod password;
