//! Food Form Component
//!
//! Controlled form shared by the add and edit modals.

use leptos::prelude::*;

use crate::models::{parse_price, Food, FoodPatch};

/// Raw text of the form inputs
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FoodFormValues {
    pub image: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl FoodFormValues {
    /// Text fields are submitted as typed. A price that does not parse is left
    /// out of the patch.
    pub fn to_patch(&self) -> FoodPatch {
        FoodPatch {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            image: Some(self.image.trim().to_string()),
            price: parse_price(&self.price),
            available: None,
        }
    }
}

impl From<&Food> for FoodFormValues {
    fn from(food: &Food) -> Self {
        Self {
            image: food.image.clone(),
            name: food.name.clone(),
            price: format!("{:.2}", food.price),
            description: food.description.clone(),
        }
    }
}

#[component]
pub fn FoodForm(
    #[prop(optional)] initial: FoodFormValues,
    #[prop(into)] title: String,
    #[prop(into)] submit_label: String,
    #[prop(into)] test_id: String,
    on_submit: Callback<FoodPatch>,
) -> impl IntoView {
    let values = RwSignal::new(initial);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(values.get_untracked().to_patch());
        values.set(FoodFormValues::default());
    };

    view! {
        <form class="food-form" data-testid=test_id on:submit=submit>
            <h1>{title}</h1>
            <input
                name="image"
                placeholder="Paste the image URL here"
                prop:value=move || values.with(|v| v.image.clone())
                on:input=move |ev| values.update(|v| v.image = event_target_value(&ev))
            />
            <input
                name="name"
                placeholder="Ex: Moda Italiana"
                prop:value=move || values.with(|v| v.name.clone())
                on:input=move |ev| values.update(|v| v.name = event_target_value(&ev))
            />
            <input
                name="price"
                placeholder="Ex: 19.90"
                inputmode="decimal"
                prop:value=move || values.with(|v| v.price.clone())
                on:input=move |ev| values.update(|v| v.price = event_target_value(&ev))
            />
            <textarea
                name="description"
                placeholder="Description"
                prop:value=move || values.with(|v| v.description.clone())
                on:input=move |ev| values.update(|v| v.description = event_target_value(&ev))
            />
            <button type="submit" class="submit-btn">
                <span class="text">{submit_label}</span>
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_patch_parses_price() {
        let values = FoodFormValues {
            image: " http://img/x.png ".to_string(),
            name: "Veggie".to_string(),
            price: "19,90".to_string(),
            description: "Fresh".to_string(),
        };
        let patch = values.to_patch();
        assert_eq!(patch.image.as_deref(), Some("http://img/x.png"));
        assert_eq!(patch.name.as_deref(), Some("Veggie"));
        assert_eq!(patch.price, Some(19.9));
        assert_eq!(patch.description.as_deref(), Some("Fresh"));
        assert_eq!(patch.available, None);
    }

    #[test]
    fn test_to_patch_drops_bad_price() {
        let values = FoodFormValues {
            price: "cheap".to_string(),
            ..Default::default()
        };
        assert_eq!(values.to_patch().price, None);
    }

    #[test]
    fn test_prefill_from_food_round_trips_price() {
        let food = Food {
            id: 4,
            name: "Ao molho".to_string(),
            price: 19.9,
            ..Default::default()
        };
        let values = FoodFormValues::from(&food);
        assert_eq!(values.price, "19.90");
        assert_eq!(food.merged(&values.to_patch()), food);
    }
}
