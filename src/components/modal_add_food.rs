//! Add Food Modal

use leptos::prelude::*;

use crate::components::{FoodForm, Modal};
use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Always opens with an empty form
#[component]
pub fn ModalAddFood() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();
    let is_open = Signal::derive(move || store.add_modal_open().get());

    let on_submit = Callback::new(move |patch| {
        ctx.add_food(patch);
        ctx.toggle_add_modal();
    });

    view! {
        <Modal is_open=is_open set_is_open=Callback::new(move |_| ctx.toggle_add_modal())>
            <FoodForm
                title="New dish"
                submit_label="Add dish"
                test_id="add-food-form"
                on_submit=on_submit
            />
        </Modal>
    }
}
