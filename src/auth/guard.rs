/**
 * Authorization Guard
 *
 * Checks applied before any mutating action reaches the data layer. A
 * failed check returns `AppError::Unauthorized`, which renders as a
 * flash banner plus a redirect to the public landing page; no mutation
 * is performed and nothing about the target resource is leaked.
 */

use bcrypt::verify;

use crate::error::AppError;
use crate::models::User;

/// Require a logged-in user, turning "anonymous" into a rejection.
pub fn require_login(user: Option<User>) -> Result<User, AppError> {
    user.ok_or(AppError::Unauthorized)
}

/// Require that the current user owns the target resource.
pub fn require_owner(current: &User, owner_id: i64) -> Result<(), AppError> {
    if current.id == owner_id {
        Ok(())
    } else {
        tracing::warn!(
            "User {} attempted to mutate resource owned by {}",
            current.id,
            owner_id
        );
        Err(AppError::Unauthorized)
    }
}

/// Self-follow is allowed by the schema but rejected here.
pub fn forbid_self_follow(current: &User, target_id: i64) -> Result<(), AppError> {
    if current.id == target_id {
        Err(AppError::validation("You cannot follow yourself"))
    } else {
        Ok(())
    }
}

/// Confirm the current password before a profile edit is applied.
///
/// A mismatch rejects the whole edit; no field changes are applied.
pub fn confirm_password(current: &User, password: &str) -> Result<bool, AppError> {
    Ok(verify(password, &current.password_hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL};

    fn test_user(id: i64) -> User {
        User {
            id,
            username: "testuser".to_string(),
            email: "test@test.com".to_string(),
            password_hash: bcrypt::hash("password", 4).unwrap(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            header_image_url: DEFAULT_HEADER_IMAGE_URL.to_string(),
            bio: String::new(),
            location: String::new(),
        }
    }

    #[test]
    fn test_require_login() {
        assert!(require_login(Some(test_user(1))).is_ok());
        assert!(matches!(
            require_login(None),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_require_owner() {
        let user = test_user(1);
        assert!(require_owner(&user, 1).is_ok());
        assert!(matches!(
            require_owner(&user, 2),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_forbid_self_follow() {
        let user = test_user(1);
        assert!(forbid_self_follow(&user, 2).is_ok());
        assert!(forbid_self_follow(&user, 1).is_err());
    }

    #[test]
    fn test_confirm_password() {
        let user = test_user(1);
        assert!(confirm_password(&user, "password").unwrap());
        assert!(!confirm_password(&user, "wrong").unwrap());
    }
}
