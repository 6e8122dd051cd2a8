/**
 * Follow Edges
 *
 * A `Follow` row is a directed edge "follower follows followed", keyed
 * by the ordered pair so at most one edge per pair can exist. The
 * predicates and list queries here back every derived relationship the
 * views need; nothing is cached on the user.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::User;

/// Follow struct representing a row in the `follows` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Follow {
    /// The user on the receiving end of the edge
    pub user_being_followed_id: i64,
    /// The user doing the following
    pub user_following_id: i64,
}

/// Create a follow edge from `follower_id` to `followed_id`.
///
/// Idempotent: following an already-followed user leaves the single
/// existing edge in place.
pub async fn follow(pool: &SqlitePool, follower_id: i64, followed_id: i64) -> Result<(), AppError> {
    sqlx::query(
        "INSERT OR IGNORE INTO follows (user_being_followed_id, user_following_id) VALUES (?1, ?2)",
    )
    .bind(followed_id)
    .bind(follower_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Delete the follow edge from `follower_id` to `followed_id`.
///
/// A no-op when no such edge exists.
pub async fn unfollow(
    pool: &SqlitePool,
    follower_id: i64,
    followed_id: i64,
) -> Result<(), AppError> {
    sqlx::query(
        "DELETE FROM follows WHERE user_being_followed_id = ?1 AND user_following_id = ?2",
    )
    .bind(followed_id)
    .bind(follower_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Does an edge `follower -> followed` exist?
pub async fn is_following(
    pool: &SqlitePool,
    follower_id: i64,
    followed_id: i64,
) -> Result<bool, AppError> {
    let edge = sqlx::query_as::<_, Follow>(
        "SELECT * FROM follows WHERE user_being_followed_id = ?1 AND user_following_id = ?2",
    )
    .bind(followed_id)
    .bind(follower_id)
    .fetch_optional(pool)
    .await?;
    Ok(edge.is_some())
}

/// Does an edge `other -> user` exist?
pub async fn is_followed_by(
    pool: &SqlitePool,
    user_id: i64,
    other_id: i64,
) -> Result<bool, AppError> {
    is_following(pool, other_id, user_id).await
}

/// Users that `user_id` follows, ordered by username.
pub async fn following(pool: &SqlitePool, user_id: i64) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT u.* FROM users u
        JOIN follows f ON f.user_being_followed_id = u.id
        WHERE f.user_following_id = ?1
        ORDER BY u.username
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(users)
}

/// Users that follow `user_id`, ordered by username.
pub async fn followers(pool: &SqlitePool, user_id: i64) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT u.* FROM users u
        JOIN follows f ON f.user_following_id = u.id
        WHERE f.user_being_followed_id = ?1
        ORDER BY u.username
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(users)
}

/// Number of users `user_id` follows.
pub async fn following_count(pool: &SqlitePool, user_id: i64) -> Result<i64, AppError> {
    let count =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follows WHERE user_following_id = ?1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;
    Ok(count)
}

/// Number of users following `user_id`.
pub async fn follower_count(pool: &SqlitePool, user_id: i64) -> Result<i64, AppError> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM follows WHERE user_being_followed_id = ?1",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(count)
}
