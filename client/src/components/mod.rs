//! Application chrome around the routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routed_view` is the only router outlet and applies the access guard;
//! the header, notice banner and dashboard shell read the `AppContext`
//! provided by `App`.

pub mod dashboard_layout;
pub mod notice_banner;
pub mod routed_view;
pub mod session_header;
pub mod sidebar;
