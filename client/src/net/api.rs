//! Async facade over the mock authentication service.
//!
//! Client-side (csr): calls wait for the configured latency via
//! `gloo-timers` before answering, so pages exercise their busy states.
//! Native builds and tests answer immediately.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; a disposed service slot
//! maps to [`AuthError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;

use super::mock_auth::MockAuthApi;
use super::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::AuthError;

fn sign_in_failed_message(err: &AuthError) -> String {
    format!("Sign-in failed: {err}")
}

fn registration_failed_message(err: &AuthError) -> String {
    format!("Registration failed: {err}")
}

/// User-facing text for a failed login or registration.
pub fn failure_message(err: &AuthError, registering: bool) -> String {
    if registering { registration_failed_message(err) } else { sign_in_failed_message(err) }
}

/// Submit credentials to the login endpoint.
///
/// # Errors
///
/// Returns the endpoint's [`AuthError`] when the credentials are rejected.
pub async fn login(
    service: StoredValue<MockAuthApi>,
    request: LoginRequest,
    latency_ms: u32,
) -> Result<AuthResponse, AuthError> {
    wait(latency_ms).await;
    service
        .try_with_value(|api| api.login(&request))
        .unwrap_or(Err(AuthError::Unavailable))
}

/// Submit a new account to the registration endpoint.
///
/// # Errors
///
/// Returns the endpoint's [`AuthError`] when the account cannot be created.
pub async fn register(
    service: StoredValue<MockAuthApi>,
    request: RegisterRequest,
    latency_ms: u32,
) -> Result<AuthResponse, AuthError> {
    wait(latency_ms).await;
    service
        .try_update_value(|api| api.register(&request))
        .unwrap_or(Err(AuthError::Unavailable))
}

/// Ask the service whether `token` is still honoured.
///
/// # Errors
///
/// Returns [`AuthError::SessionExpired`] when the token is rejected.
pub async fn check_session(service: StoredValue<MockAuthApi>, token: String, latency_ms: u32) -> Result<(), AuthError> {
    wait(latency_ms).await;
    service
        .try_with_value(|api| api.check_session(&token))
        .unwrap_or(Err(AuthError::Unavailable))
}

async fn wait(latency_ms: u32) {
    #[cfg(feature = "csr")]
    gloo_timers::future::TimeoutFuture::new(latency_ms).await;
    #[cfg(not(feature = "csr"))]
    let _ = latency_ms;
}
