//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every change goes
//! through `DashboardState::reduce`, which consumes the old state and returns
//! the next one, so readers never see a half-applied transition.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Food;

/// Dashboard view state, created empty when the view activates
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DashboardState {
    /// Backend listing order, then append order for dishes created here
    pub foods: Vec<Food>,
    /// Dish targeted by the edit modal
    pub editing_food: Option<Food>,
    pub add_modal_open: bool,
    pub edit_modal_open: bool,
}

/// State transitions
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Replace the whole list (loader)
    Loaded(Vec<Food>),
    /// Append a newly created dish
    Appended(Food),
    /// Replace the dish with the same id; no-op when absent
    Replaced(Food),
    /// Drop every dish with this id; no-op when absent
    Removed(u32),
    /// Target a dish and open the edit modal in the same step
    EditRequested(Food),
    ToggleAddModal,
    ToggleEditModal,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::Loaded(foods) => Self { foods, ..self },
            Action::Appended(food) => Self {
                foods: self.foods.into_iter().chain(std::iter::once(food)).collect(),
                ..self
            },
            Action::Replaced(updated) => Self {
                foods: self
                    .foods
                    .into_iter()
                    .map(|food| if food.id == updated.id { updated.clone() } else { food })
                    .collect(),
                ..self
            },
            Action::Removed(id) => Self {
                foods: self.foods.into_iter().filter(|food| food.id != id).collect(),
                ..self
            },
            Action::EditRequested(food) => Self {
                editing_food: Some(food),
                edit_modal_open: true,
                ..self
            },
            Action::ToggleAddModal => Self {
                add_modal_open: !self.add_modal_open,
                ..self
            },
            Action::ToggleEditModal => Self {
                edit_modal_open: !self.edit_modal_open,
                ..self
            },
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Create the store for a fresh view activation and provide it via context
pub fn provide_dashboard_store() -> DashboardStore {
    let store = Store::new(DashboardState::new());
    provide_context(store);
    store
}

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

/// Reduce the current state and write back only the fields that changed, so
/// subscribers of untouched fields are not notified. Returns false if the
/// store was already disposed (view deactivated while a request was in flight).
///
/// `editing_food` is written before `edit_modal_open`; both land before the
/// next render since effects run after the current task.
pub fn store_dispatch(store: &DashboardStore, action: Action) -> bool {
    let Some(current) = store.try_get_untracked() else {
        return false;
    };
    let next = current.clone().reduce(action);

    if next.foods != current.foods {
        store.foods().set(next.foods);
    }
    if next.editing_food != current.editing_food {
        store.editing_food().set(next.editing_food);
    }
    if next.edit_modal_open != current.edit_modal_open {
        store.edit_modal_open().set(next.edit_modal_open);
    }
    if next.add_modal_open != current.add_modal_open {
        store.add_modal_open().set(next.add_modal_open);
    }
    true
}
