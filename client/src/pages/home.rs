//! Public landing page.

use leptos::prelude::*;

use crate::state::context::AppContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let signed_in = move || ctx.is_authenticated();

    view! {
        <div class="home-page">
            <h1>"AeroCast"</h1>
            <p class="home-page__tagline">"Flights, baggage and airport weather in one place."</p>
            <ul class="home-page__links">
                <li><a href="/feed">"Smart Feed"</a></li>
                <li><a href="/navigation">"Indoor Navigation"</a></li>
                <li><a href="/baggage-tracking">"Baggage Tracking"</a></li>
            </ul>
            <Show
                when=signed_in
                fallback=|| view! { <a class="home-page__cta" href="/login">"Sign in"</a> }
            >
                <a class="home-page__cta" href="/dashboard">"Open dashboard"</a>
            </Show>
        </div>
    }
}
