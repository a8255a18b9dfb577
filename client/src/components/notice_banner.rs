//! Banner rendering the current transient notice.

use leptos::prelude::*;

use crate::state::context::AppContext;
use crate::state::notice::NoticeState;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notice = expect_context::<AppContext>().notice;

    move || {
        notice.with(|state| state.current.clone()).map(|current| {
            view! {
                <div class=current.kind.css_class() role="status">
                    <strong>{current.title}</strong>
                    {current.detail.map(|detail| view! { <span class="notice__detail">{detail}</span> })}
                    <button class="notice__close" on:click=move |_| notice.update(NoticeState::clear)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
