/**
 * Signup, Login, and Logout Handlers
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt in `auth::service`; they are never
 *   logged or rendered
 * - A failed login re-renders with one merged "Invalid credentials."
 *   message whether the username or the password was wrong
 * - Login/signup set the session cookie; logout removes it
 */

use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::sessions::{clear_session, create_token, flash_cookie, session_cookie, take_flash, Flash};
use crate::auth::service;
use crate::error::AppError;
use crate::forms::{LoginForm, UserAddForm};
use crate::middleware::auth::CurrentUser;
use crate::render;
use crate::server::state::AppState;

fn error_banners(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!(r#"<div class="alert alert-danger">{}</div>"#, render::escape(e)))
        .collect()
}

fn signup_form(flash: Option<&Flash>, errors: &[String], form: &UserAddForm) -> Html<String> {
    let body = format!(
        r#"{}<h2>Join Warbler today.</h2>
<form method="POST" action="/signup" id="user_form">
<input name="username" placeholder="Username" value="{}">
<input name="email" placeholder="E-mail" value="{}">
<input name="password" type="password" placeholder="Password">
<input name="image_url" placeholder="(Optional) Image URL" value="{}">
<button>Sign me up!</button>
</form>"#,
        error_banners(errors),
        render::escape(&form.username),
        render::escape(&form.email),
        render::escape(form.image_url.as_deref().unwrap_or("")),
    );
    render::page("Sign up", flash, &body)
}

fn login_form(flash: Option<&Flash>, errors: &[String], form: &LoginForm) -> Html<String> {
    let body = format!(
        r#"{}<h2>Welcome back.</h2>
<form method="POST" action="/login" id="user_form">
<input name="username" placeholder="Username" value="{}">
<input name="password" type="password" placeholder="Password">
<button>Log in</button>
</form>"#,
        error_banners(errors),
        render::escape(&form.username),
    );
    render::page("Log in", flash, &body)
}

/// `GET /signup` - render the signup form.
pub async fn signup_page(jar: CookieJar) -> Response {
    let (jar, flash) = take_flash(jar);
    let empty = UserAddForm {
        username: String::new(),
        email: String::new(),
        password: String::new(),
        image_url: None,
    };
    (jar, signup_form(flash.as_ref(), &[], &empty)).into_response()
}

/// `POST /signup` - create the account and log the new user in.
///
/// Validation and integrity failures redisplay the form; nothing is
/// half-persisted in either case.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<UserAddForm>,
) -> Result<Response, AppError> {
    if let Err(AppError::Validation(errors)) = form.validate() {
        return Ok(signup_form(None, &errors, &form).into_response());
    }

    let created = match service::signup(
        &state.db,
        &form.username,
        &form.email,
        &form.password,
        form.image_url().as_deref(),
    )
    .await
    {
        Ok(created) => created,
        Err(AppError::Integrity(detail)) => {
            tracing::warn!("Signup conflict: {}", detail);
            let errors = vec!["Username or email already taken".to_string()];
            return Ok(signup_form(None, &errors, &form).into_response());
        }
        Err(other) => return Err(other),
    };

    let token = create_token(created.id)?;
    let jar = jar.add(session_cookie(token));
    Ok((jar, render::found("/")).into_response())
}

/// `GET /login` - render the login form.
pub async fn login_page(jar: CookieJar) -> Response {
    let (jar, flash) = take_flash(jar);
    let empty = LoginForm {
        username: String::new(),
        password: String::new(),
    };
    (jar, login_form(flash.as_ref(), &[], &empty)).into_response()
}

/// `POST /login` - authenticate and set the session identity.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if let Err(AppError::Validation(errors)) = form.validate() {
        return Ok(login_form(None, &errors, &form).into_response());
    }

    match service::authenticate(&state.db, &form.username, &form.password).await? {
        Some(found) => {
            let token = create_token(found.id)?;
            let jar = jar
                .add(session_cookie(token))
                .add(flash_cookie(&format!("Hello, {}!", found.username), "success"));
            Ok((jar, render::found("/")).into_response())
        }
        None => {
            let errors = vec!["Invalid credentials.".to_string()];
            Ok(login_form(None, &errors, &form).into_response())
        }
    }
}

/// `POST /logout` - clear the session identity.
pub async fn logout(CurrentUser(current): CurrentUser, jar: CookieJar) -> Response {
    tracing::info!("User logged out: {}", current.username);
    let jar = clear_session(jar).add(flash_cookie(
        "You have successfully logged out.",
        "success",
    ));
    (jar, render::found("/login")).into_response()
}
