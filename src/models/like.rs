/**
 * Like Rows
 *
 * A `Like` is a (user, message) pair with a composite key, so liking a
 * message twice cannot produce a second row. Unliking when no row exists
 * deletes nothing and is not an error.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::Message;

/// Like struct representing a row in the `likes` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    /// The user who liked
    pub user_id: i64,
    /// The liked message
    pub message_id: i64,
}

/// Record that `user_id` likes `message_id`. Idempotent.
pub async fn like_message(
    pool: &SqlitePool,
    user_id: i64,
    message_id: i64,
) -> Result<(), AppError> {
    sqlx::query("INSERT OR IGNORE INTO likes (user_id, message_id) VALUES (?1, ?2)")
        .bind(user_id)
        .bind(message_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove the like, if present. A no-op otherwise.
pub async fn unlike_message(
    pool: &SqlitePool,
    user_id: i64,
    message_id: i64,
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM likes WHERE user_id = ?1 AND message_id = ?2")
        .bind(user_id)
        .bind(message_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Look up a single like by its composite key.
pub async fn get_like(
    pool: &SqlitePool,
    user_id: i64,
    message_id: i64,
) -> Result<Option<Like>, AppError> {
    let like = sqlx::query_as::<_, Like>(
        "SELECT * FROM likes WHERE user_id = ?1 AND message_id = ?2",
    )
    .bind(user_id)
    .bind(message_id)
    .fetch_optional(pool)
    .await?;
    Ok(like)
}

/// Messages liked by `user_id`, newest first.
pub async fn liked_messages(pool: &SqlitePool, user_id: i64) -> Result<Vec<Message>, AppError> {
    let messages = sqlx::query_as::<_, Message>(
        r#"
        SELECT m.* FROM messages m
        JOIN likes l ON l.message_id = m.id
        WHERE l.user_id = ?1
        ORDER BY m.timestamp DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(messages)
}

/// Number of messages `user_id` has liked.
pub async fn like_count(pool: &SqlitePool, user_id: i64) -> Result<i64, AppError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE user_id = ?1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
