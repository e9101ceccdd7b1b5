//! Header Component

use leptos::prelude::*;

/// Top bar with the "new dish" action
#[component]
pub fn Header(open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <span class="logo">"Food Dashboard"</span>
                <nav>
                    <button
                        type="button"
                        class="new-food-btn"
                        data-testid="new-food-button"
                        on:click=move |_| open_modal.run(())
                    >
                        <span class="text">"New dish"</span>
                        <span class="icon">"+"</span>
                    </button>
                </nav>
            </div>
        </header>
    }
}
