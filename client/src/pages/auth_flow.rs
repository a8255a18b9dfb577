//! Completion step shared by the login and registration forms.
//!
//! ERROR HANDLING
//! ==============
//! A rejected submission leaves the session store untouched; the message is
//! shown inline and as a notice.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::error::AuthError;
use crate::net::api;
use crate::net::types::{AuthResponse, User};
use crate::state::context::AppContext;
use crate::state::notice::NoticeKind;

pub(crate) fn welcome_detail(user: &User) -> String {
    format!("Welcome, {} ({})", user.name, user.role.label())
}

/// Store the session and navigate to `destination`, or surface the failure.
pub(crate) fn complete<F>(
    ctx: AppContext,
    outcome: Result<AuthResponse, AuthError>,
    destination: &str,
    registering: bool,
    failure: RwSignal<String>,
    navigate: &F,
) where
    F: Fn(&str, NavigateOptions),
{
    match outcome {
        Ok(response) => {
            let detail = welcome_detail(&response.user);
            ctx.sign_in(response);
            let title = if registering { "Account created" } else { "Signed in" };
            ctx.notify(NoticeKind::Success, title, Some(detail));
            navigate(destination, NavigateOptions::default());
        }
        Err(err) => {
            log::warn!("authentication rejected: {err}");
            let message = api::failure_message(&err, registering);
            ctx.notify(NoticeKind::Error, &message, None);
            failure.set(message);
        }
    }
}
