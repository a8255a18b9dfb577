//! Login page with email + password and the `redirectTo` hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard sends anonymous visitors here with the page they asked for in
//! `redirectTo`. A successful sign-in consumes that target once; anything
//! missing or non-local falls back to the landing path. `expired=1` marks a
//! session that was rejected mid-use.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use super::auth_flow;
use crate::net::api;
use crate::net::mock_auth::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::net::types::LoginRequest;
use crate::routing::redirect::{EXPIRED_PARAM, REDIRECT_PARAM};
use crate::state::context::AppContext;
use crate::util::form::{FieldErrors, validate_input};

/// `expired` counts as set unless it is explicitly `0` or `false`.
pub(crate) fn flag_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !matches!(v.trim(), "0" | "false"))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let failure = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let expired = move || query.with(|q| flag_enabled(q.get(EXPIRED_PARAM).as_deref()));
    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field).map(str::to_owned));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_input(LoginRequest::new(&email.get_untracked(), &password.get_untracked())) {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        failure.set(String::new());
        busy.set(true);

        let destination = ctx.destination_after_sign_in(query.with_untracked(|q| q.get(REDIRECT_PARAM)));
        let latency = ctx.config.with_value(|config| config.mock_latency_ms);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::login(ctx.auth_service, request, latency).await;
            auth_flow::complete(ctx, outcome, &destination, false, failure, &navigate);
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"AeroCast"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <Show when=expired>
                    <p class="login-message login-message--warning">
                        "Your session has expired. Please sign in again."
                    </p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <span class="login-field-error">{field_error("email")}</span>
                    <label class="login-label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <span class="login-field-error">{field_error("password")}</span>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !failure.get().is_empty()>
                    <p class="login-message login-message--error">{move || failure.get()}</p>
                </Show>
                <p class="login-card__hint">
                    "Demo account: " {DEMO_EMAIL} " / " {DEMO_PASSWORD}
                </p>
                <p class="login-card__footer">
                    "No account yet? " <a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
