//! Single router outlet that applies the access guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every path the Leptos router sees lands here. The view resolves it in the
//! route table and runs the guard inside a memo that tracks both the location
//! and the session signal, so a sign-out while a protected view is mounted
//! redirects immediately. Redirected views are never rendered, and a chain of
//! redirects collapses into one history replacement.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::dashboard_layout::DashboardLayout;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::section::SectionPage;
use crate::routing::guard::Navigation;
use crate::routing::table::ViewId;
use crate::state::context::AppContext;

#[component]
pub fn RoutedView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let location = use_location();
    let navigate = use_navigate();

    let navigation = Memo::new(move |_| {
        let path = location.pathname.get();
        let search = location.search.get();
        let search = search.trim_start_matches('?');
        if search.is_empty() { ctx.plan(&path) } else { ctx.plan(&format!("{path}?{search}")) }
    });

    Effect::new(move || {
        if let Navigation::Redirect { to, reason } = navigation.get() {
            match ctx.settle(&to) {
                Some(destination) => {
                    log::debug!("redirecting to {destination} ({reason:?})");
                    navigate(&destination, NavigateOptions { replace: true, ..Default::default() });
                }
                None => log::error!("redirect loop starting at {to}, staying put"),
            }
        }
    });

    move || match navigation.get() {
        Navigation::Render(route) => render_view(route.view),
        Navigation::Redirect { .. } => view! { <p class="routing">"Redirecting..."</p> }.into_any(),
        Navigation::NotFound => view! { <p class="routing">"Page not found."</p> }.into_any(),
    }
}

fn render_view(id: ViewId) -> AnyView {
    let page = match id {
        ViewId::Home => view! { <HomePage/> }.into_any(),
        ViewId::Login => view! { <LoginPage/> }.into_any(),
        ViewId::Register => view! { <RegisterPage/> }.into_any(),
        ViewId::Dashboard => view! { <DashboardPage/> }.into_any(),
        other => view! { <SectionPage id=other/> }.into_any(),
    };
    if id.in_dashboard() {
        view! { <DashboardLayout>{page}</DashboardLayout> }.into_any()
    } else {
        page
    }
}
