/**
 * Home Page Handler
 *
 * `GET /` is the public landing page. Anonymous visitors get a signup
 * prompt; logged-in users get their feed (their own warbles plus those
 * of everyone they follow). Either variant renders and clears any
 * pending flash banner, which is how post-redirect messages like
 * "Hello, testuser!" and "Access unauthorized." reach the user.
 */

use axum::{extract::State, response::IntoResponse, response::Response};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::sessions::take_flash;
use crate::error::AppError;
use crate::middleware::auth::MaybeUser;
use crate::models::message;
use crate::render;
use crate::server::state::AppState;

pub async fn homepage(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let (jar, flash) = take_flash(jar);

    let body = match &user {
        Some(current) => {
            let feed = message::feed_for_user(&state.db, current.id).await?;
            let items: String = feed.iter().map(render::message_item).collect();
            format!(
                r#"<section class="home-feed">
<p><a href="/users/{}">@{}</a></p>
<form method="POST" action="/messages/new">
<textarea name="text" placeholder="What's happening?"></textarea>
<button>Add my message!</button>
</form>
<ul class="feed">{}</ul>
</section>"#,
                current.id,
                render::escape(&current.username),
                items
            )
        }
        None => r#"<section class="home-hero">
<h1>What's Happening?</h1>
<p>New to Warbler?</p>
<a href="/signup">Sign up now</a> or <a href="/login">Log in</a>
</section>"#
            .to_string(),
    };

    Ok((jar, render::page("Home", flash.as_ref(), &body)).into_response())
}
