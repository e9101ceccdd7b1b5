//! Delete Confirm Button Component
//!
//! Two-step delete: the first click arms the button, the second one fires.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Step {
    Idle,
    Armed,
}

/// Delete action guarded by an inline "Delete?" prompt.
///
/// Clicks never reach the card underneath.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(optional, into)] test_id: Option<String>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let step = RwSignal::new(Step::Idle);

    let go = move |ev: web_sys::MouseEvent, next: Step| {
        ev.stop_propagation();
        step.set(next);
    };

    move || match step.get() {
        Step::Idle => view! {
            <button
                type="button"
                class=button_class.clone()
                data-testid=test_id.clone()
                on:click=move |ev| go(ev, Step::Armed)
            >
                "Delete"
            </button>
        }
        .into_any(),
        Step::Armed => view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        go(ev, Step::Idle);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| go(ev, Step::Idle)
                >
                    "No"
                </button>
            </span>
        }
        .into_any(),
    }
}
