//! Top bar with the signed-in user and the sign-out action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session signal, so it updates as soon as the store changes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::context::AppContext;
use crate::state::notice::NoticeKind;

#[component]
pub fn SessionHeader() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let navigate = use_navigate();

    let signed_in = move || ctx.is_authenticated();
    let identity = move || {
        ctx.session
            .with(|s| s.user().map(|user| (user.name.clone(), user.email.clone())))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        ctx.logout();
        ctx.notify(NoticeKind::Info, "Signed out", None);
        let login_path = ctx.config.with_value(|config| config.login_path.clone());
        navigate(&login_path, NavigateOptions::default());
    };

    view! {
        <header class="session-header">
            <a href="/" class="session-header__brand">"AeroCast"</a>
            <nav class="session-header__links">
                <a href="/feed">"Smart Feed"</a>
                <a href="/navigation">"Navigation"</a>
                <a href="/baggage-tracking">"Baggage"</a>
                <a href="/dashboard">"Dashboard"</a>
            </nav>
            <span class="session-header__spacer"></span>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <a href="/login" class="session-header__action">"Sign in"</a>
                        <a href="/register" class="session-header__action">"Create account"</a>
                    }
                }
            >
                <span class="session-header__user">
                    <strong>{move || identity().0}</strong>
                    <small>{move || identity().1}</small>
                </span>
            </Show>
            <button
                class="session-header__action"
                style:display=move || if signed_in() { "inline-block" } else { "none" }
                on:click=on_logout
            >
                "Sign out"
            </button>
        </header>
    }
}
