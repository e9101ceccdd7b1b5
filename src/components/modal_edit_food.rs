//! Edit Food Modal
//!
//! Form is rebuilt from `editing_food` whenever the target changes.

use leptos::prelude::*;

use crate::components::{FoodForm, FoodFormValues, Modal};
use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn ModalEditFood() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();
    let is_open = Signal::derive(move || store.edit_modal_open().get());

    let on_submit = Callback::new(move |patch| {
        ctx.update_food(patch);
        ctx.toggle_edit_modal();
    });

    view! {
        <Modal is_open=is_open set_is_open=Callback::new(move |_| ctx.toggle_edit_modal())>
            {move || store.editing_food().get().map(|food| view! {
                <FoodForm
                    initial=FoodFormValues::from(&food)
                    title="Edit dish"
                    submit_label="Save changes"
                    test_id="edit-food-form"
                    on_submit=on_submit
                />
            })}
        </Modal>
    }
}
