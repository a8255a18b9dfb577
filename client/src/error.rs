//! Error types shared across the client.
//!
//! ERROR HANDLING
//! ==============
//! Every failure here is terminal at the boundary where it occurs. Storage
//! errors degrade to an anonymous session, auth errors become transient
//! notices, config errors fall back to defaults. None of them reach the user
//! as a crash.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure reading or writing the persisted session record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage unavailable")]
    Unavailable,

    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("persisted session malformed: {0}")]
    Malformed(String),
}

/// Failure reported by the authentication endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("an account already exists for {email}")]
    EmailTaken { email: String },

    #[error("your session has expired, please sign in again")]
    SessionExpired,

    #[error("authentication service unavailable")]
    Unavailable,
}

/// Invalid build-time configuration override.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an absolute path, got {value:?}")]
    InvalidPath { var: &'static str, value: String },

    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}
