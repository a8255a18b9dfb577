//! Passenger registration page.
//!
//! New accounts always land on the dashboard; `redirectTo` only applies to
//! the login hand-off.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::auth_flow;
use crate::net::api;
use crate::net::types::RegisterRequest;
use crate::state::context::AppContext;
use crate::util::form::{FieldErrors, validate_input};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let passport = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let failure = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field).map(str::to_owned));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = RegisterRequest::new(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &passport.get_untracked(),
        );
        let request = match validate_input(input) {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        failure.set(String::new());
        busy.set(true);

        let destination = ctx.config.with_value(|config| config.landing_path.clone());
        let latency = ctx.config.with_value(|config| config.mock_latency_ms);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::register(ctx.auth_service, request, latency).await;
            auth_flow::complete(ctx, outcome, &destination, true, failure, &navigate);
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"AeroCast"</h1>
                <p class="login-card__subtitle">"Create a passenger account"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="register-name">"Full name"</label>
                    <input
                        id="register-name"
                        class="login-input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <span class="login-field-error">{field_error("name")}</span>
                    <label class="login-label" for="register-email">"Email"</label>
                    <input
                        id="register-email"
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <span class="login-field-error">{field_error("email")}</span>
                    <label class="login-label" for="register-password">"Password"</label>
                    <input
                        id="register-password"
                        class="login-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <span class="login-field-error">{field_error("password")}</span>
                    <label class="login-label" for="register-passport">"Passport number"</label>
                    <input
                        id="register-passport"
                        class="login-input login-input--code"
                        type="text"
                        maxlength="9"
                        prop:value=move || passport.get()
                        on:input=move |ev| passport.set(event_target_value(&ev).to_ascii_uppercase())
                    />
                    <span class="login-field-error">{field_error("passport")}</span>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || !failure.get().is_empty()>
                    <p class="login-message login-message--error">{move || failure.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
