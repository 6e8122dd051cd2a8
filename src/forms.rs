/**
 * Form Payloads and Validation
 *
 * Each form the route layer accepts is a serde-deserialized struct with
 * a `validate` method. All fields default to empty strings so a missing
 * field is reported as a validation error listing the field, not as a
 * deserialization failure.
 *
 * Validation runs before any persistence attempt; a failed validation
 * never reaches the data layer.
 */

use serde::Deserialize;

use crate::error::AppError;

/// Maximum message text length.
pub const MAX_MESSAGE_LEN: usize = 140;

/// Maximum bio length on the edit form.
pub const MAX_BIO_LEN: usize = 160;

/// Maximum location length.
pub const MAX_LOCATION_LEN: usize = 50;

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Form for adding messages.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageForm {
    #[serde(default)]
    pub text: String,
}

impl MessageForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        if self.text.is_empty() {
            errors.push("text is required".to_string());
        }
        if self.text.chars().count() > MAX_MESSAGE_LEN {
            errors.push(format!("text must be at most {} characters", MAX_MESSAGE_LEN));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

/// Form for adding users.
#[derive(Debug, Clone, Deserialize)]
pub struct UserAddForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl UserAddForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        if self.username.is_empty() {
            errors.push("Username is required".to_string());
        }
        if self.email.is_empty() {
            errors.push("E-mail is required".to_string());
        } else if !self.email.contains('@') {
            errors.push("E-mail must be a valid address".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }

    /// The image url, with empty submissions treated as absent.
    pub fn image_url(&self) -> Option<String> {
        optional(self.image_url.clone())
    }
}

/// Login form.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        if self.username.is_empty() {
            errors.push("Username is required".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

/// Form for editing user info.
///
/// `password` is the account's current password, required to confirm
/// the edit; it is never written back to the row here.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEditForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub header_image_url: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub password: String,
}

impl UserEditForm {
    /// Check required fields and lengths, listing every missing field.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        if self.username.is_empty() {
            errors.push("Username is required".to_string());
        }
        if self.email.is_empty() {
            errors.push("E-mail is required".to_string());
        } else if !self.email.contains('@') {
            errors.push("E-mail must be a valid address".to_string());
        }
        if self.bio.is_empty() {
            errors.push("Bio is required".to_string());
        } else if self.bio.chars().count() > MAX_BIO_LEN {
            errors.push(format!("Bio must be at most {} characters", MAX_BIO_LEN));
        }
        if self.location.chars().count() > MAX_LOCATION_LEN {
            errors.push(format!(
                "Location must be at most {} characters",
                MAX_LOCATION_LEN
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }

    pub fn image_url(&self) -> Option<String> {
        optional(self.image_url.clone())
    }

    pub fn header_image_url(&self) -> Option<String> {
        optional(self.header_image_url.clone())
    }
}
