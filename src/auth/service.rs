/**
 * Authentication Service
 *
 * Signup and login built on the user model and bcrypt.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt (`DEFAULT_COST`) before they reach
 *   the database; the plaintext is never stored or logged
 * - `authenticate` returns `Ok(None)` for both an unknown username and a
 *   wrong password, so callers cannot enumerate accounts
 */

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::user::{self, User};

/// Create a new user account.
///
/// Hashes the password and inserts the row. `image_url` defaults to the
/// placeholder when empty or omitted. A duplicate username or email
/// surfaces as `AppError::Integrity` and nothing is persisted.
pub async fn signup(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password: &str,
    image_url: Option<&str>,
) -> Result<User, AppError> {
    let password_hash = hash(password, DEFAULT_COST)?;
    let created = user::create_user(pool, username, email, &password_hash, image_url).await?;
    tracing::info!("User created: {} ({})", created.username, created.email);
    Ok(created)
}

/// Verify a username/password pair.
///
/// Returns the user on a match and `Ok(None)` otherwise. The two failure
/// modes (no such user, wrong password) are indistinguishable here.
pub async fn authenticate(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<User>, AppError> {
    let Some(found) = user::get_user_by_username(pool, username).await? else {
        tracing::warn!("Login failed for {}", username);
        return Ok(None);
    };

    if verify(password, &found.password_hash)? {
        tracing::info!("User logged in: {}", found.username);
        Ok(Some(found))
    } else {
        tracing::warn!("Login failed for {}", username);
        Ok(None)
    }
}
