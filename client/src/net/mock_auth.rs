//! In-memory stand-in for the authentication service.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend in this build. The mock keeps accounts for the lifetime
//! of the page and answers with the same `{token, user}` shape a real service
//! would, so the session store and pages cannot tell the difference.

#[cfg(test)]
#[path = "mock_auth_test.rs"]
mod mock_auth_test;

use std::collections::HashMap;

use super::types::{AuthResponse, LoginRequest, RegisterRequest, User, UserRole};
use crate::error::AuthError;

pub const DEMO_EMAIL: &str = "admin@aerocast.com";
pub const DEMO_PASSWORD: &str = "password123";

const TOKEN_PREFIX: &str = "mock-token-";

#[derive(Clone, Debug)]
struct Account {
    password: String,
    user: User,
}

/// Account registry answering login, registration and session checks.
#[derive(Clone, Debug)]
pub struct MockAuthApi {
    accounts: HashMap<String, Account>,
}

impl Default for MockAuthApi {
    fn default() -> Self {
        let demo = User {
            id: "1".to_owned(),
            name: "Admin AeroCast".to_owned(),
            email: DEMO_EMAIL.to_owned(),
            role: UserRole::Admin,
            passport: None,
        };
        let mut accounts = HashMap::new();
        accounts.insert(email_key(DEMO_EMAIL), Account { password: DEMO_PASSWORD.to_owned(), user: demo });
        Self { accounts }
    }
}

impl MockAuthApi {
    /// Check credentials and issue a fresh token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for an unknown email or a
    /// wrong password; the two cases are indistinguishable to the caller.
    pub fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError> {
        let account = self
            .accounts
            .get(&email_key(&request.email))
            .filter(|account| account.password == request.password)
            .ok_or(AuthError::InvalidCredentials)?;
        log::debug!("mock auth: login accepted for {}", account.user.email);
        Ok(AuthResponse { token: issue_token(), user: account.user.clone() })
    }

    /// Create a passenger account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmailTaken`] if an account already uses the email.
    pub fn register(&mut self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        let key = email_key(&request.email);
        if self.accounts.contains_key(&key) {
            return Err(AuthError::EmailTaken { email: request.email.clone() });
        }
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name.clone(),
            email: request.email.clone(),
            role: UserRole::Passenger,
            passport: Some(request.passport.clone()),
        };
        self.accounts.insert(key, Account { password: request.password.clone(), user: user.clone() });
        log::debug!("mock auth: registered {}", user.email);
        Ok(AuthResponse { token: issue_token(), user })
    }

    /// Validate a token presented by a protected request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionExpired`] for any token this service could
    /// not have issued.
    pub fn check_session(&self, token: &str) -> Result<(), AuthError> {
        let issued = token
            .strip_prefix(TOKEN_PREFIX)
            .is_some_and(|id| uuid::Uuid::parse_str(id).is_ok());
        if issued { Ok(()) } else { Err(AuthError::SessionExpired) }
    }
}

fn email_key(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn issue_token() -> String {
    format!("{TOKEN_PREFIX}{}", uuid::Uuid::new_v4())
}
