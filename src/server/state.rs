/**
 * Application State
 *
 * The central state container handed to the Axum router. Warbler keeps
 * no long-lived in-process state beyond the pooled database connection;
 * everything else lives in the database or the session cookie.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Allow handlers to extract the pool directly with `State(SqlitePool)`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}
