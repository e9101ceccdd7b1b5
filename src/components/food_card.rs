//! Food Card Component
//!
//! One dish in the list with edit and delete actions.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::{format_price, Food};

#[component]
pub fn FoodCard(
    food: Food,
    on_edit: Callback<Food>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let price = format_price(food.price);
    let edit_target = food.clone();

    view! {
        <div class="food" class:unavailable=move || !available>
            <header>
                <img src=food.image.clone() alt=food.name.clone() />
            </header>
            <section class="body">
                <h2>{food.name.clone()}</h2>
                <p>{food.description.clone()}</p>
                <p class="price">
                    <b>{price}</b>
                </p>
            </section>
            <section class="footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| on_edit.run(edit_target.clone())
                    >
                        "Edit"
                    </button>
                    <DeleteConfirmButton
                        button_class="icon"
                        test_id=format!("remove-food-{}", id)
                        on_confirm=Callback::new(move |_| on_delete.run(id))
                    />
                </div>
                <div class="availability-container">
                    <p>{if available { "Available" } else { "Unavailable" }}</p>
                </div>
            </section>
        </div>
    }
}
