/**
 * Error Conversion
 *
 * This module converts `AppError` values into HTTP responses so handlers
 * can return them directly with `?`.
 *
 * # Mapping
 *
 * - `Unauthorized` - flash "Access unauthorized." and redirect (302) to
 *   the public landing page, leaking nothing about the target resource
 * - `NotFound` - 404 page
 * - `Validation` - 400 page listing the field messages
 * - `Integrity` - 400 page with a generic conflict message
 * - `InvalidCredentials` - 401 page with the merged login failure message
 * - everything else - 500 page; details are logged, never rendered
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::sessions::flash_cookie;
use crate::error::types::AppError;
use crate::render;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => {
                // Checked before any write is attempted, so redirecting
                // here never leaves a half-applied mutation behind.
                let jar = CookieJar::new().add(flash_cookie("Access unauthorized.", "danger"));
                (jar, render::found("/")).into_response()
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                render::error_page("404 Not Found", "There is nothing here."),
            )
                .into_response(),
            AppError::Validation(messages) => (
                StatusCode::BAD_REQUEST,
                render::error_page("Invalid input", &messages.join("<br>")),
            )
                .into_response(),
            AppError::Integrity(detail) => {
                tracing::warn!("Integrity error: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    render::error_page("Conflict", "Username or email already taken"),
                )
                    .into_response()
            }
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                render::error_page("Login failed", "Invalid credentials."),
            )
                .into_response(),
            other => {
                tracing::error!("Internal error: {:?}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    render::error_page("Server error", "Something went wrong."),
                )
                    .into_response()
            }
        }
    }
}
