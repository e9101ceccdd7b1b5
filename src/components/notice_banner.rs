//! Notice Banner Component
//!
//! Shows the latest failure notice with a dismiss button.

use leptos::prelude::*;

use crate::context::use_dashboard;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_dashboard();

    view! {
        {move || ctx.notice.get().map(|notice| view! {
            <div class="notice" role="alert">
                <span class="notice-text">{notice.message}</span>
                <button type="button" class="notice-dismiss" on:click=move |_| ctx.dismiss_notice()>
                    "×"
                </button>
            </div>
        })}
    }
}
