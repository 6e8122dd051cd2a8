/**
 * Minimal HTML Rendering
 *
 * Warbler is not a templating showcase; handlers render small HTML
 * pages through these helpers. Pages share one shell with an optional
 * flash banner, and every piece of user-supplied text is escaped.
 */

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::auth::sessions::Flash;
use crate::models::{Message, User};

/// Escape text for inclusion in HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A 302 redirect to `location`.
///
/// Axum's `Redirect` helpers emit 303/307/308; form posts here answer
/// with a plain 302 like the original flows, so the response is built
/// directly.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Render the shared page shell with an optional flash banner.
pub fn page(title: &str, flash: Option<&Flash>, body: &str) -> Html<String> {
    let banner = match flash {
        Some(f) => format!(
            r#"<div class="alert alert-{}">{}</div>"#,
            escape(&f.category),
            escape(&f.message)
        ),
        None => String::new(),
    };
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{} | Warbler</title></head>
<body>
<nav><a href="/">Warbler</a></nav>
{}
{}
</body>
</html>"#,
        escape(title),
        banner,
        body
    ))
}

/// A bare error page without flash state.
pub fn error_page(title: &str, message: &str) -> Html<String> {
    page(title, None, &format!("<p>{}</p>", message))
}

/// One message as a list item with a link to its page.
pub fn message_item(message: &Message) -> String {
    format!(
        r#"<li class="message"><a href="/messages/{}">{}</a> <span class="timestamp">{}</span></li>"#,
        message.id,
        escape(&message.text),
        message.timestamp.format("%d %B %Y")
    )
}

/// One user as a list item with a link to their profile.
pub fn user_item(user: &User) -> String {
    format!(
        r#"<li class="user-card"><a href="/users/{}">@{}</a></li>"#,
        user.id,
        escape(&user.username)
    )
}
