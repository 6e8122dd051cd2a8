/**
 * Current-User Extraction
 *
 * Extractors that resolve the session cookie to a user row before a
 * handler runs:
 *
 * - `MaybeUser` - `Option<User>`; never rejects. For pages that render
 *   both anonymous and logged-in variants.
 * - `CurrentUser` - rejects anonymous requests with
 *   `AppError::Unauthorized` (flash + redirect to the landing page).
 *
 * A missing cookie, an invalid or expired token, and a token whose id
 * resolves to no user are all treated as anonymous.
 */

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::guard;
use crate::auth::sessions::{user_id_from_token, CURR_USER_KEY};
use crate::error::AppError;
use crate::models::{user, User};
use crate::server::state::AppState;

/// The authenticated user for this request.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// The authenticated user, if any.
#[derive(Clone, Debug)]
pub struct MaybeUser(pub Option<User>);

async fn load_session_user(parts: &Parts, state: &AppState) -> Option<User> {
    let jar = CookieJar::from_headers(&parts.headers);
    let cookie = jar.get(CURR_USER_KEY)?;
    let user_id = user_id_from_token(cookie.value())?;

    match user::get_user_by_id(&state.db, user_id).await {
        Ok(found) => found,
        Err(e) => {
            tracing::error!("Failed to load session user {}: {:?}", user_id, e);
            None
        }
    }
}

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(load_session_user(parts, state).await))
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = guard::require_login(load_session_user(parts, state).await)?;
        Ok(CurrentUser(user))
    }
}
