/**
 * User Model and Database Operations
 *
 * This module handles user rows and the queries against them. The
 * password is stored only as a bcrypt hash; the plaintext never touches
 * this module (see `auth::service`).
 */

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::AppError;

/// Placeholder profile image applied when signup omits one.
pub const DEFAULT_IMAGE_URL: &str = "/static/images/default-pic.png";

/// Placeholder header image for new accounts.
pub const DEFAULT_HEADER_IMAGE_URL: &str = "/static/images/warbler-hero.jpg";

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique)
    pub username: String,
    /// Email address (unique)
    pub email: String,
    /// Hashed password (bcrypt), never the plaintext
    pub password_hash: String,
    /// Profile image URL
    pub image_url: String,
    /// Header image URL
    pub header_image_url: String,
    /// Free-text bio
    pub bio: String,
    /// Free-text location, max 50 chars
    pub location: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<User #{}: {}, {}>", self.id, self.username, self.email)
    }
}

/// Profile fields a user can change through the edit form.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: String,
    pub location: String,
}

/// Insert a new user row and return it.
///
/// `image_url` falls back to the placeholder when empty or omitted.
/// A duplicate username or email surfaces as `AppError::Integrity`.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
    image_url: Option<&str>,
) -> Result<User, AppError> {
    let image_url = match image_url {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_IMAGE_URL,
    };

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, password_hash, image_url, header_image_url, bio, location)
        VALUES (?1, ?2, ?3, ?4, ?5, '', '')
        RETURNING id, username, email, password_hash, image_url, header_image_url, bio, location
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(image_url)
    .bind(DEFAULT_HEADER_IMAGE_URL)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Look up a user by id.
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Look up a user by username.
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// List users, optionally filtered by a username substring.
pub async fn list_users(pool: &SqlitePool, search: Option<&str>) -> Result<Vec<User>, AppError> {
    let users = match search {
        Some(q) if !q.is_empty() => {
            sqlx::query_as::<_, User>(
                "SELECT * FROM users WHERE username LIKE ?1 ORDER BY username",
            )
            .bind(format!("%{}%", q))
            .fetch_all(pool)
            .await?
        }
        _ => {
            sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY username")
                .fetch_all(pool)
                .await?
        }
    };
    Ok(users)
}

/// Apply a profile edit, all fields at once.
///
/// The caller (the authorization guard path in the profile handler) has
/// already verified the password and validated the fields; a duplicate
/// username/email still surfaces here as `AppError::Integrity` and no
/// fields are changed in that case.
pub async fn update_profile(
    pool: &SqlitePool,
    id: i64,
    update: &ProfileUpdate,
) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET username = ?1, email = ?2, image_url = ?3, header_image_url = ?4,
            bio = ?5, location = ?6
        WHERE id = ?7
        RETURNING id, username, email, password_hash, image_url, header_image_url, bio, location
        "#,
    )
    .bind(&update.username)
    .bind(&update.email)
    .bind(&update.image_url)
    .bind(&update.header_image_url)
    .bind(&update.bio)
    .bind(&update.location)
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Delete a user.
///
/// The foreign-key cascade removes the user's messages, likes, and
/// follow edges in both directions in the same statement.
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    tracing::info!("Deleted user {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_display_form() {
        let user = User {
            id: 7,
            username: "testuser".to_string(),
            email: "test@test.com".to_string(),
            password_hash: "HASHED".to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            header_image_url: DEFAULT_HEADER_IMAGE_URL.to_string(),
            bio: String::new(),
            location: String::new(),
        };
        assert_eq!(user.to_string(), "<User #7: testuser, test@test.com>");
    }
}
