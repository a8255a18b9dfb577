//! DTOs exchanged with the authentication endpoint.
//!
//! DESIGN
//! ======
//! The same `User` shape is returned by the endpoint, held by the session
//! store and written to `localStorage`, so serde attributes here define the
//! persisted format as well.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Access level of an account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    Passenger,
    Company,
    Atc,
    Admin,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::Passenger => "Passenger",
            Self::Company => "Airline",
            Self::Atc => "Air traffic control",
            Self::Admin => "Administrator",
        }
    }
}

/// Profile of an authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable account identifier.
    pub id: String,
    /// Display name shown in the header.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Access level; older records without it are treated as passengers.
    #[serde(default)]
    pub role: UserRole,
    /// Passport number captured at registration, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport: Option<String>,
}

/// Successful response of login and registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Credentials submitted by the login form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: String,
}

impl LoginRequest {
    /// Build a request from raw form input, trimming the email.
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.trim().to_owned(), password: password.to_owned() }
    }
}

/// Account details submitted by the registration form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 64, message = "Name must be between 2 and 64 characters."))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
    #[validate(custom(function = "validate_passport"))]
    pub passport: String,
}

impl RegisterRequest {
    /// Build a request from raw form input.
    ///
    /// Name and email are trimmed; the passport number is trimmed and
    /// upper-cased since it is typed from a printed document.
    pub fn new(name: &str, email: &str, password: &str, passport: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            password: password.to_owned(),
            passport: passport.trim().to_ascii_uppercase(),
        }
    }
}

/// Passport numbers are 6 to 9 upper-case letters or digits.
fn validate_passport(passport: &str) -> Result<(), ValidationError> {
    let valid_len = (6..=9).contains(&passport.len());
    let valid_chars = passport.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if valid_len && valid_chars {
        return Ok(());
    }
    let mut err = ValidationError::new("passport");
    err.message = Some("Passport number must be 6 to 9 letters or digits.".into());
    Err(err)
}
