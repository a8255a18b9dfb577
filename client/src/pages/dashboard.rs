//! Dashboard landing view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only after the guard accepted the session. On mount it asks the
//! auth service whether the stored token is still honoured. A rejected token
//! expires the session; the guard then replaces this page with the expired
//! login URL pointing back here.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::error::AuthError;
use crate::net::api;
use crate::net::types::User;
use crate::state::context::AppContext;

pub(crate) fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}", user.name),
        None => "Welcome".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    if let Some(token) = ctx.session.with_untracked(|s| s.token().map(str::to_owned)) {
        let latency = ctx.config.with_value(|config| config.mock_latency_ms);
        leptos::task::spawn_local(async move {
            match api::check_session(ctx.auth_service, token, latency).await {
                Ok(()) => log::debug!("session token accepted"),
                Err(AuthError::SessionExpired) => ctx.expire(),
                Err(err) => log::warn!("session check failed: {err}"),
            }
        });
    }

    let user = move || ctx.session.with(|s| s.user().cloned());

    view! {
        <div class="dashboard-page">
            <h1>{move || greeting(user().as_ref())}</h1>
            {move || {
                user()
                    .map(|user| {
                        view! {
                            <dl class="dashboard-page__profile">
                                <dt>"Email"</dt>
                                <dd>{user.email}</dd>
                                <dt>"Role"</dt>
                                <dd>{user.role.label()}</dd>
                                <dt>"Passport"</dt>
                                <dd>{user.passport.unwrap_or_else(|| "Not provided".to_owned())}</dd>
                            </dl>
                        }
                    })
            }}
        </div>
    }
}
