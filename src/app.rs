//! Food Dashboard App
//!
//! Main view: header, the two modals and the food list.

use leptos::prelude::*;

use crate::components::{FoodList, Header, ModalAddFood, ModalEditFood, NoticeBanner};
use crate::config::AppConfig;
use crate::context::DashboardContext;
use crate::models::Food;
use crate::store::{provide_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Fresh state for this activation
    let store = provide_dashboard_store();
    let ctx = DashboardContext::new(store, config);
    provide_context(ctx);

    // Load foods on mount
    Effect::new(move |_| ctx.load());

    let foods = Signal::derive(move || store.foods().get());

    view! {
        <Header open_modal=Callback::new(move |_| ctx.toggle_add_modal()) />
        <NoticeBanner />
        <ModalAddFood />
        <ModalEditFood />

        <FoodList
            foods=foods
            on_edit=Callback::new(move |food: Food| ctx.edit_food(food))
            on_delete=Callback::new(move |id: u32| ctx.delete_food(id))
        />
    }
}
