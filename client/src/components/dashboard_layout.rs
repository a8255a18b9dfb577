//! Shell shared by every view under `/dashboard`.

use leptos::prelude::*;

use super::sidebar::Sidebar;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <div class="dashboard-layout">
            <Sidebar/>
            <section class="dashboard-layout__content">{children()}</section>
        </div>
    }
}
