/**
 * Application Initialization
 *
 * Builds the Axum application from a database pool. Tests construct
 * their own in-memory pool and call `create_app` directly; the server
 * binary goes through `config::load_database` first.
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::routes::router::create_router;
use crate::server::state::AppState;

/// Create the Axum application with all routes configured.
pub fn create_app(pool: SqlitePool) -> Router<()> {
    let app_state = AppState::new(pool);
    create_router(app_state)
}
