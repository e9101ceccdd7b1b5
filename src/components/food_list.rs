//! Food List Component

use leptos::prelude::*;

use crate::components::FoodCard;
use crate::models::Food;

#[component]
pub fn FoodList(
    #[prop(into)] foods: Signal<Vec<Food>>,
    on_edit: Callback<Food>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || foods.get()
                key=|food| {
                    // Key on every displayed field so a replaced record re-renders
                    (
                        food.id,
                        food.name.clone(),
                        food.description.clone(),
                        food.image.clone(),
                        food.price.to_bits(),
                        food.available,
                    )
                }
                children=move |food| view! {
                    <FoodCard food=food on_edit=on_edit on_delete=on_delete />
                }
            />
        </div>
    }
}
