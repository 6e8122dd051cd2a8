/**
 * Database Schema
 *
 * This module creates the four application tables. `create_all` is
 * idempotent and runs at startup and in tests.
 *
 * # Tables
 *
 * - `users` - accounts with unique username and email
 * - `messages` - warbles, many-to-one to users
 * - `follows` - directed follow edges, composite key
 * - `likes` - user/message like pairs, composite key
 *
 * Referential integrity is enforced by the database: deleting a user
 * cascades to their messages, likes, and follow edges (both directions);
 * deleting a message cascades to its likes. Connections must have
 * `foreign_keys` enabled (see `server::config`).
 */

use sqlx::SqlitePool;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    username         TEXT NOT NULL UNIQUE,
    email            TEXT NOT NULL UNIQUE,
    password_hash    TEXT NOT NULL,
    image_url        TEXT NOT NULL DEFAULT '/static/images/default-pic.png',
    header_image_url TEXT NOT NULL DEFAULT '/static/images/warbler-hero.jpg',
    bio              TEXT NOT NULL DEFAULT '',
    location         TEXT NOT NULL DEFAULT ''
)
"#;

const CREATE_MESSAGES: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    text      TEXT NOT NULL,
    timestamp TEXT NOT NULL,
    user_id   INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
)
"#;

const CREATE_FOLLOWS: &str = r#"
CREATE TABLE IF NOT EXISTS follows (
    user_being_followed_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    user_following_id      INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    PRIMARY KEY (user_being_followed_id, user_following_id)
)
"#;

const CREATE_LIKES: &str = r#"
CREATE TABLE IF NOT EXISTS likes (
    user_id    INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    message_id INTEGER NOT NULL REFERENCES messages(id) ON DELETE CASCADE,
    PRIMARY KEY (user_id, message_id)
)
"#;

/// Create all application tables if they do not exist yet.
pub async fn create_all(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_USERS, CREATE_MESSAGES, CREATE_FOLLOWS, CREATE_LIKES] {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
