//! Route tree, access guard and login redirect intent.
//!
//! ARCHITECTURE
//! ============
//! `table` holds the tree data structure and path resolution, `routes` the
//! concrete application tree, `guard` the per-navigation decision, and
//! `redirect` the `redirectTo` round trip. None of it depends on Leptos, so
//! the whole navigation model is testable natively.

pub mod guard;
pub mod redirect;
pub mod routes;
pub mod table;
