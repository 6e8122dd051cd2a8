/**
 * User Handlers
 *
 * Public pages (user list, profile pages, follower/following/likes
 * lists) plus the guarded mutations: follow, unfollow, profile edit,
 * and account deletion. Every mutation checks the authorization guard
 * before touching the data layer.
 */

use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::auth::guard;
use crate::auth::sessions::{clear_session, take_flash, Flash};
use crate::error::AppError;
use crate::forms::UserEditForm;
use crate::middleware::auth::CurrentUser;
use crate::models::{follows, like, message, user, User};
use crate::render;
use crate::server::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UsersQuery {
    pub q: Option<String>,
}

/// `GET /users` - list users, optionally filtered by `?q=`.
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let (jar, flash) = take_flash(jar);
    let users = user::list_users(&state.db, query.q.as_deref()).await?;
    let items: String = users.iter().map(render::user_item).collect();
    let body = format!(r#"<ul id="users-index" class="user-index">{}</ul>"#, items);
    Ok((jar, render::page("Users", flash.as_ref(), &body)).into_response())
}

/// `GET /users/{id}` - one user's profile page with counts.
pub async fn show_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let (jar, flash) = take_flash(jar);
    let shown = user::get_user_by_id(&state.db, user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let messages = message::messages_for_user(&state.db, user_id).await?;
    let message_count = message::message_count(&state.db, user_id).await?;
    let following_count = follows::following_count(&state.db, user_id).await?;
    let follower_count = follows::follower_count(&state.db, user_id).await?;
    let like_count = like::like_count(&state.db, user_id).await?;

    let items: String = messages.iter().map(render::message_item).collect();
    let body = format!(
        r#"<div id="user-show">
<h2>@{username}</h2>
<p class="bio">{bio}</p>
<p class="location">{location}</p>
<ul class="stats">
<li><a href="/users/{id}">Messages</a> <span>{message_count}</span></li>
<li><a href="/users/{id}/following">Following</a> <span>{following_count}</span></li>
<li><a href="/users/{id}/followers">Followers</a> <span>{follower_count}</span></li>
<li><a href="/users/{id}/likes">Likes</a> <span>{like_count}</span></li>
</ul>
<ul class="user-messages">{items}</ul>
</div>"#,
        username = render::escape(&shown.username),
        bio = render::escape(&shown.bio),
        location = render::escape(&shown.location),
        id = shown.id,
        message_count = message_count,
        following_count = following_count,
        follower_count = follower_count,
        like_count = like_count,
        items = items,
    );

    let title = format!("@{}", shown.username);
    Ok((jar, render::page(&title, flash.as_ref(), &body)).into_response())
}

async fn user_list_page(
    state: &AppState,
    user_id: i64,
    title: &str,
    users: Vec<User>,
) -> Result<Html<String>, AppError> {
    let shown = user::get_user_by_id(&state.db, user_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let items: String = users.iter().map(render::user_item).collect();
    let body = format!(
        r#"<h2>@{}: {}</h2><ul class="user-index">{}</ul>"#,
        render::escape(&shown.username),
        title,
        items
    );
    Ok(render::page(title, None, &body))
}

/// `GET /users/{id}/following` - users this user follows.
pub async fn show_following(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Response, AppError> {
    let users = follows::following(&state.db, user_id).await?;
    Ok(user_list_page(&state, user_id, "Following", users)
        .await?
        .into_response())
}

/// `GET /users/{id}/followers` - users following this user.
pub async fn show_followers(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Response, AppError> {
    let users = follows::followers(&state.db, user_id).await?;
    Ok(user_list_page(&state, user_id, "Followers", users)
        .await?
        .into_response())
}

/// `GET /users/{id}/likes` - messages this user has liked.
pub async fn show_likes(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Response, AppError> {
    let shown = user::get_user_by_id(&state.db, user_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let liked = like::liked_messages(&state.db, user_id).await?;
    let items: String = liked.iter().map(render::message_item).collect();
    let body = format!(
        r#"<h2>@{}: Likes</h2><ul class="user-likes">{}</ul>"#,
        render::escape(&shown.username),
        items
    );
    Ok(render::page("Likes", None, &body).into_response())
}

/// `POST /users/follow/{id}` - start following a user.
///
/// Idempotent; self-follow is rejected by the guard.
pub async fn add_follow(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Path(followed_id): Path<i64>,
) -> Result<Response, AppError> {
    guard::forbid_self_follow(&current, followed_id)?;
    user::get_user_by_id(&state.db, followed_id)
        .await?
        .ok_or(AppError::NotFound)?;

    follows::follow(&state.db, current.id, followed_id).await?;
    Ok(render::found(&format!("/users/{}/following", current.id)))
}

/// `POST /users/stop-following/{id}` - stop following a user.
///
/// A no-op when no edge exists.
pub async fn stop_following(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Path(followed_id): Path<i64>,
) -> Result<Response, AppError> {
    user::get_user_by_id(&state.db, followed_id)
        .await?
        .ok_or(AppError::NotFound)?;

    follows::unfollow(&state.db, current.id, followed_id).await?;
    Ok(render::found(&format!("/users/{}/following", current.id)))
}

fn edit_form(flash: Option<&Flash>, errors: &[String], current: &User, form: &UserEditForm) -> Html<String> {
    let banners: String = errors
        .iter()
        .map(|e| format!(r#"<div class="alert alert-danger">{}</div>"#, render::escape(e)))
        .collect();
    let body = format!(
        r#"{banners}<h2>Edit Your Profile.</h2>
<form method="POST" action="/users/profile" id="user_form">
<input name="username" placeholder="Username" value="{username}">
<input name="email" placeholder="E-mail" value="{email}">
<input name="image_url" placeholder="(Optional) Image URL" value="{image_url}">
<input name="header_image_url" placeholder="(Optional) Header Image URL" value="{header_image_url}">
<input name="bio" placeholder="Bio" value="{bio}">
<input name="location" placeholder="Location" value="{location}">
<input name="password" type="password" placeholder="Current password to confirm">
<button>Edit this user!</button>
</form>
<form method="POST" action="/users/delete"><button>Delete my account</button></form>"#,
        banners = banners,
        username = render::escape(&form.username),
        email = render::escape(&form.email),
        image_url = render::escape(form.image_url.as_deref().unwrap_or(&current.image_url)),
        header_image_url =
            render::escape(form.header_image_url.as_deref().unwrap_or(&current.header_image_url)),
        bio = render::escape(&form.bio),
        location = render::escape(&form.location),
    );
    render::page("Edit Your Profile", flash, &body)
}

fn edit_form_from_user(flash: Option<&Flash>, current: &User) -> Html<String> {
    let form = UserEditForm {
        username: current.username.clone(),
        email: current.email.clone(),
        image_url: Some(current.image_url.clone()),
        header_image_url: Some(current.header_image_url.clone()),
        bio: current.bio.clone(),
        location: current.location.clone(),
        password: String::new(),
    };
    edit_form(flash, &[], current, &form)
}

/// `GET /users/profile` - the current user's edit form.
pub async fn profile_page(CurrentUser(current): CurrentUser, jar: CookieJar) -> Response {
    let (jar, flash) = take_flash(jar);
    (jar, edit_form_from_user(flash.as_ref(), &current)).into_response()
}

/// `POST /users/profile` - apply a profile edit.
///
/// All-or-nothing: missing required fields or a wrong password leave
/// every field untouched.
pub async fn edit_profile(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Form(form): Form<UserEditForm>,
) -> Result<Response, AppError> {
    if let Err(AppError::Validation(errors)) = form.validate() {
        return Ok(edit_form(None, &errors, &current, &form).into_response());
    }

    if !guard::confirm_password(&current, &form.password)? {
        let errors = vec!["Password Incorrect".to_string()];
        return Ok(edit_form(None, &errors, &current, &form).into_response());
    }

    let update = user::ProfileUpdate {
        username: form.username.clone(),
        email: form.email.clone(),
        image_url: form
            .image_url()
            .unwrap_or_else(|| user::DEFAULT_IMAGE_URL.to_string()),
        header_image_url: form
            .header_image_url()
            .unwrap_or_else(|| user::DEFAULT_HEADER_IMAGE_URL.to_string()),
        bio: form.bio.clone(),
        location: form.location.clone(),
    };

    match user::update_profile(&state.db, current.id, &update).await {
        Ok(updated) => Ok(render::found(&format!("/users/{}", updated.id))),
        Err(AppError::Integrity(detail)) => {
            tracing::warn!("Profile edit conflict for user {}: {}", current.id, detail);
            let errors = vec!["Username or email already taken".to_string()];
            Ok(edit_form(None, &errors, &current, &form).into_response())
        }
        Err(other) => Err(other),
    }
}

/// `POST /users/delete` - delete the current user's account.
///
/// Cascades to their messages, likes, and follow edges, then clears the
/// session identity.
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    jar: CookieJar,
) -> Result<Response, AppError> {
    user::delete_user(&state.db, current.id).await?;
    let jar = clear_session(jar);
    Ok((jar, render::found("/signup")).into_response())
}
