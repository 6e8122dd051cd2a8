/**
 * Session Identity and Flash Cookies
 *
 * The session is a single well-known cookie (`curr_user`) holding a
 * signed token whose subject is the current user's id. Login sets it,
 * logout removes it; a missing cookie, a bad signature, or an id that
 * resolves to no user all mean "anonymous".
 *
 * Flash messages are one-shot banners carried in a second cookie: set
 * alongside a redirect, rendered and cleared by the next full page.
 * The payload is JSON, base64-encoded so it stays within the cookie
 * value charset.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use axum_extra::extract::cookie::{Cookie, CookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Name of the session cookie holding the current user's token.
pub const CURR_USER_KEY: &str = "curr_user";

/// Name of the one-shot flash message cookie.
pub const FLASH_KEY: &str = "flash";

/// Session token lifetime: 30 days.
const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Claims carried in the session token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Get the session signing secret from the environment.
fn session_secret() -> String {
    std::env::var("SESSION_SECRET").unwrap_or_else(|_| {
        // Dev fallback only; set SESSION_SECRET in production.
        "warbler-dev-secret".to_string()
    })
}

/// Create a signed session token for a user.
pub fn create_token(user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(session_secret().as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify a session token and return its claims.
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(session_secret().as_ref());
    let data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(data.claims)
}

/// Extract the user id from a session token, if the token is valid.
pub fn user_id_from_token(token: &str) -> Option<i64> {
    let claims = verify_token(token).ok()?;
    claims.sub.parse::<i64>().ok()
}

/// Build the session cookie set at login.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((CURR_USER_KEY, token))
        .path("/")
        .http_only(true)
        .build()
}

/// Remove the session cookie from the jar (logout).
pub fn clear_session(jar: CookieJar) -> CookieJar {
    let mut removal = Cookie::from(CURR_USER_KEY);
    removal.set_path("/");
    jar.remove(removal)
}

/// A one-shot banner message with a display category
/// (`success` or `danger`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub message: String,
    pub category: String,
}

/// Build a flash cookie carrying one banner message.
pub fn flash_cookie(message: &str, category: &str) -> Cookie<'static> {
    let flash = Flash {
        message: message.to_string(),
        category: category.to_string(),
    };
    let payload = serde_json::to_string(&flash).unwrap_or_default();
    Cookie::build((FLASH_KEY, URL_SAFE_NO_PAD.encode(payload)))
        .path("/")
        .http_only(true)
        .build()
}

/// Consume the pending flash message, if any.
///
/// Returns the jar with the flash cookie removed so the banner shows
/// exactly once.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let Some(cookie) = jar.get(FLASH_KEY) else {
        return (jar, None);
    };

    let flash = URL_SAFE_NO_PAD
        .decode(cookie.value())
        .ok()
        .and_then(|bytes| serde_json::from_slice::<Flash>(&bytes).ok());

    let mut removal = Cookie::from(FLASH_KEY);
    removal.set_path("/");
    (jar.remove(removal), flash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_verify_token() {
        let token = create_token(42).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_user_id_from_token() {
        let token = create_token(7).unwrap();
        assert_eq!(user_id_from_token(&token), Some(7));
    }

    #[test]
    fn test_invalid_token_rejected() {
        assert!(verify_token("invalid.token.here").is_err());
        assert_eq!(user_id_from_token("invalid.token.here"), None);
    }

    #[test]
    fn test_flash_cookie_round_trip() {
        let jar = CookieJar::new().add(flash_cookie("Hello, testuser!", "success"));
        let (jar, flash) = take_flash(jar);

        let flash = flash.unwrap();
        assert_eq!(flash.message, "Hello, testuser!");
        assert_eq!(flash.category, "success");

        // Consumed: a second take finds nothing.
        let (_, again) = take_flash(jar);
        assert_eq!(again, None);
    }
}
