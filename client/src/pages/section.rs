//! Titled shell for views without dedicated content.

use leptos::prelude::*;

use crate::routing::table::ViewId;

#[component]
pub fn SectionPage(id: ViewId) -> impl IntoView {
    view! {
        <div class="section-page">
            <h1>{id.title()}</h1>
            <p class="section-page__empty">"No data to show yet."</p>
        </div>
    }
}
