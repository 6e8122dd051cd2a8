/**
 * Message Model and Database Operations
 *
 * Messages ("warbles") are short texts owned by exactly one user. Text
 * length is validated at the form layer (max 140 chars); this module
 * only persists and queries rows.
 */

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::AppError;

/// Message struct representing a row in the `messages` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    /// Unique message ID
    pub id: i64,
    /// Message text, max 140 chars
    pub text: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Owning user ID
    pub user_id: i64,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Message: {}, {}, {}", self.id, self.text, self.user_id)
    }
}

/// Insert a new message owned by `user_id` and return it.
pub async fn create_message(
    pool: &SqlitePool,
    user_id: i64,
    text: &str,
) -> Result<Message, AppError> {
    let message = sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (text, timestamp, user_id)
        VALUES (?1, ?2, ?3)
        RETURNING id, text, timestamp, user_id
        "#,
    )
    .bind(text)
    .bind(Utc::now())
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(message)
}

/// Look up a message by id.
pub async fn get_message(pool: &SqlitePool, id: i64) -> Result<Option<Message>, AppError> {
    let message = sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(message)
}

/// Delete a message. Its likes go with it via the foreign-key cascade.
pub async fn delete_message(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM messages WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// All messages authored by one user, newest first.
pub async fn messages_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Message>, AppError> {
    let messages = sqlx::query_as::<_, Message>(
        "SELECT * FROM messages WHERE user_id = ?1 ORDER BY timestamp DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(messages)
}

/// The logged-in feed: the user's own messages plus those of everyone
/// they follow, newest first, capped at 100.
pub async fn feed_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Message>, AppError> {
    let messages = sqlx::query_as::<_, Message>(
        r#"
        SELECT * FROM messages
        WHERE user_id = ?1
           OR user_id IN (SELECT user_being_followed_id FROM follows WHERE user_following_id = ?1)
        ORDER BY timestamp DESC
        LIMIT 100
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(messages)
}

/// Number of messages a user has authored.
pub async fn message_count(pool: &SqlitePool, user_id: i64) -> Result<i64, AppError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages WHERE user_id = ?1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
