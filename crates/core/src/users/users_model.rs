//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a registered user.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Argon2 hash of the password. Never leaves the backend.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub created_at: NaiveDateTime,
}

impl User {
    /// Whether this user may operate on a record owned by `owner_id`.
    /// Staff users may operate on any record.
    pub fn can_access(&self, owner_id: &str) -> bool {
        self.is_staff || self.id == owner_id
    }
}

/// Registration payload submitted by a prospective user.
///
/// Fields are optional so that an absent field can be told apart from an
/// empty or zero value; `validate` enforces presence.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserRegistration {
    /// Validates the registration data.
    pub fn validate(&self) -> Result<()> {
        if self.name().trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        let email = self.email();
        if email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "email".to_string(),
            )));
        }
        if !email.contains('@') {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "'{}' is not a valid e-mail address",
                email
            ))));
        }
        let password = self.password.as_deref().unwrap_or_default();
        if password.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "password".to_string(),
            )));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            ))));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

/// Input model for inserting a user record. The password is already hashed
/// by the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
}
