/**
 * Application Error Types
 *
 * This module defines the error taxonomy for Warbler. Each variant maps
 * to one of the failure modes a request can hit:
 *
 * - `Validation` - required field missing or malformed; rejected before
 *   any persistence attempt
 * - `Integrity` - uniqueness or referential constraint violated at the
 *   database (duplicate username/email, duplicate composite key)
 * - `Unauthorized` - anonymous or non-owner attempting a protected action
 * - `NotFound` - lookup by id found nothing
 * - `InvalidCredentials` - bad username or bad password at login; the two
 *   causes are deliberately indistinguishable
 * - `Database` / `Hash` / `Session` - infrastructure failures
 */

use thiserror::Error;

/// All errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum AppError {
    /// One or more form fields failed validation.
    ///
    /// Carries the field-level messages to redisplay. Nothing was
    /// persisted when this is returned.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// A uniqueness constraint was violated at commit time.
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// Anonymous caller, or an authenticated caller that does not own
    /// the target resource.
    #[error("Access unauthorized.")]
    Unauthorized,

    /// Lookup by id found nothing.
    #[error("Not found")]
    NotFound,

    /// Login failed. Unknown username and wrong password produce the
    /// same variant so callers cannot enumerate accounts.
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// Database error other than a constraint violation.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// Password hashing or verification failed.
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Session token could not be created.
    #[error("Session error: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    /// Create a validation error for a single field.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(vec![message.into()])
    }
}

/// Map sqlx errors onto the application taxonomy.
///
/// Unique-constraint violations become `Integrity` so callers can catch
/// them and re-render with a conflict message; a missing row becomes
/// `NotFound`; everything else is an infrastructure failure.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Integrity(db.message().to_string())
            }
            other => AppError::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = AppError::Validation(vec![
            "Username is required".to_string(),
            "E-mail is required".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: Username is required, E-mail is required"
        );
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn test_unauthorized_message() {
        assert_eq!(AppError::Unauthorized.to_string(), "Access unauthorized.");
    }
}
