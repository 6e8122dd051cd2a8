/**
 * Message Handlers
 *
 * Create, show, delete, like, and unlike messages. Showing a message is
 * public; every mutation requires a session and, for deletion, message
 * ownership. Liking your own message is allowed; the like/unlike pair
 * is idempotent at the data layer.
 */

use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::guard;
use crate::auth::sessions::take_flash;
use crate::error::AppError;
use crate::forms::MessageForm;
use crate::middleware::auth::CurrentUser;
use crate::models::{like, message, user};
use crate::render;
use crate::server::state::AppState;

/// `POST /messages/new` - create a message owned by the current user.
pub async fn add_message(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Form(form): Form<MessageForm>,
) -> Result<Response, AppError> {
    form.validate()?;
    let created = message::create_message(&state.db, current.id, &form.text).await?;
    tracing::info!("Message {} created by user {}", created.id, current.id);
    Ok(render::found(&format!("/users/{}", current.id)))
}

/// `GET /messages/{id}` - show one message, 404 when absent.
pub async fn show_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let (jar, flash) = take_flash(jar);
    let shown = message::get_message(&state.db, message_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let author = user::get_user_by_id(&state.db, shown.user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let body = format!(
        r#"<div id="messages" class="message-show">
<a href="/users/{author_id}">@{username}</a>
<p class="message-text">{text}</p>
<span class="timestamp">{timestamp}</span>
<form method="POST" action="/messages/{id}/like"><button>Like</button></form>
<form method="POST" action="/messages/{id}/unlike"><button>Unlike</button></form>
</div>"#,
        author_id = author.id,
        username = render::escape(&author.username),
        text = render::escape(&shown.text),
        timestamp = shown.timestamp.format("%d %B %Y"),
        id = shown.id,
    );
    Ok((jar, render::page("Message", flash.as_ref(), &body)).into_response())
}

/// `POST /messages/{id}/delete` - delete a message, author only.
pub async fn delete_message(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Path(message_id): Path<i64>,
) -> Result<Response, AppError> {
    let found = message::get_message(&state.db, message_id)
        .await?
        .ok_or(AppError::NotFound)?;

    guard::require_owner(&current, found.user_id)?;

    message::delete_message(&state.db, message_id).await?;
    tracing::info!("Message {} deleted by user {}", message_id, current.id);
    Ok(render::found(&format!("/users/{}", current.id)))
}

/// `POST /messages/{id}/like` - like a message if not already liked.
pub async fn like_message(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Path(message_id): Path<i64>,
) -> Result<Response, AppError> {
    message::get_message(&state.db, message_id)
        .await?
        .ok_or(AppError::NotFound)?;

    like::like_message(&state.db, current.id, message_id).await?;
    Ok(render::found("/"))
}

/// `POST /messages/{id}/unlike` - remove a like if present.
///
/// Unliking a message that was never liked is a no-op.
pub async fn unlike_message(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Path(message_id): Path<i64>,
) -> Result<Response, AppError> {
    message::get_message(&state.db, message_id)
        .await?
        .ok_or(AppError::NotFound)?;

    like::unlike_message(&state.db, current.id, message_id).await?;
    Ok(render::found("/"))
}
