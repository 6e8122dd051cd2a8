//! Router Configuration
//!
//! Maps every HTTP route to its handler. Authorization is enforced per
//! handler through the `CurrentUser` extractor and the guard functions,
//! so public and protected routes live in one router.
//!
//! # Routes
//!
//! ## Pages
//! - `GET /` - landing page / logged-in feed
//! - `GET,POST /signup` - signup
//! - `GET,POST /login` - login
//! - `POST /logout` - logout
//!
//! ## Users
//! - `GET /users` - user index (optional `?q=` filter)
//! - `GET /users/{id}` - profile with counts
//! - `GET /users/{id}/likes` / `/following` / `/followers`
//! - `POST /users/follow/{id}` / `/users/stop-following/{id}`
//! - `GET,POST /users/profile` - self edit
//! - `POST /users/delete` - self delete
//!
//! ## Messages
//! - `POST /messages/new`
//! - `GET /messages/{id}`
//! - `POST /messages/{id}/delete` / `/like` / `/unlike`
//!
//! ## Static
//! - `/static/*` served from the local `static` directory

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::error::AppError;
use crate::handlers::{auth, home, messages, users};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", get(home::homepage))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/users", get(users::list_users))
        .route("/users/profile", get(users::profile_page).post(users::edit_profile))
        .route("/users/delete", post(users::delete_user))
        .route("/users/follow/{id}", post(users::add_follow))
        .route("/users/stop-following/{id}", post(users::stop_following))
        .route("/users/{id}", get(users::show_user))
        .route("/users/{id}/likes", get(users::show_likes))
        .route("/users/{id}/following", get(users::show_following))
        .route("/users/{id}/followers", get(users::show_followers))
        .route("/messages/new", post(messages::add_message))
        .route("/messages/{id}", get(messages::show_message))
        .route("/messages/{id}/delete", post(messages::delete_message))
        .route("/messages/{id}/like", post(messages::like_message))
        .route("/messages/{id}/unlike", post(messages::unlike_message));

    // Static assets, then a 404 page for everything unknown
    let router = router.nest_service("/static", ServeDir::new("static"));
    let router = router.fallback(|| async { AppError::NotFound });

    router.with_state(app_state)
}
