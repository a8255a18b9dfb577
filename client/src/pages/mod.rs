//! Screens rendered for resolved routes.
//!
//! ARCHITECTURE
//! ============
//! Login and registration share the completion step in `auth_flow`. Pages
//! never check access themselves; `RoutedView` only mounts them after the
//! guard allowed the path.

pub(crate) mod auth_flow;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod section;
