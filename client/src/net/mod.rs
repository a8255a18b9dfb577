//! Authentication service access.
//!
//! SYSTEM CONTEXT
//! ==============
//! `mock_auth` holds the in-memory account registry, `api` is the async
//! surface pages call, and `types` defines the shared request/response schema.

pub mod api;
pub mod mock_auth;
pub mod types;
