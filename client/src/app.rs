//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_banner::NoticeBanner;
use crate::components::routed_view::RoutedView;
use crate::components::session_header::SessionHeader;
use crate::config::AppConfig;
use crate::routing::routes::app_routes;
use crate::state::context::AppContext;

/// Root application component.
///
/// Builds the shared `AppContext` and hands every path to `RoutedView`,
/// which matches it against the application's own route tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env().unwrap_or_else(|err| {
        log::warn!("invalid build configuration, using defaults: {err}");
        AppConfig::default()
    });
    provide_context(AppContext::new(config, app_routes()));

    view! {
        <Title text="AeroCast"/>

        <Router>
            <SessionHeader/>
            <NoticeBanner/>
            <main class="app-main">
                <Routes fallback=|| view! { <RoutedView/> }>
                    <Route path=StaticSegment("") view=RoutedView/>
                    <Route path=WildcardSegment("any") view=RoutedView/>
                </Routes>
            </main>
        </Router>
    }
}
