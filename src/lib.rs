//! Warbler - Main Library
//!
//! Warbler is a small social-networking web application: users sign up,
//! post short text messages ("warbles"), follow other users, and like
//! messages. The server is built on Axum with a SQLite database accessed
//! through sqlx.
//!
//! # Module Structure
//!
//! - **`models`** - Entity structs and database queries
//!   - User, Message, Follow, Like
//!   - Derived relationship queries (followers, following, liked messages)
//!
//! - **`auth`** - Authentication and authorization
//!   - Signup and credential verification (bcrypt)
//!   - Session tokens carried in an HTTP-only cookie
//!   - Ownership checks for mutating actions
//!
//! - **`forms`** - Form payloads and field validation
//!
//! - **`handlers`** - HTTP route handlers (home, auth, users, messages)
//!
//! - **`middleware`** - Current-user extraction from the session cookie
//!
//! - **`routes`** - Router configuration
//!
//! - **`render`** - Minimal HTML page rendering with flash banners
//!
//! - **`error`** - Error types and HTTP response conversion
//!
//! - **`server`** - Configuration, application state, and initialization

pub mod auth;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod render;
pub mod routes;
pub mod server;
