//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is framework-free and owns the authentication lifecycle;
//! `context` wires it into Leptos; `notice` holds transient messages.

pub mod context;
pub mod notice;
pub mod session;
