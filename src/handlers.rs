//! Mutation Handlers and Loader
//!
//! Each handler performs one backend call and, on success, returns the
//! `Action` to apply. Nothing touches the store here; the caller applies the
//! action once the call has resolved, so a failed call changes nothing.

use log::{debug, error, info};

use crate::api::{ApiResult, FoodApi};
use crate::models::{Food, FoodPatch, NewFood};
use crate::store::Action;

/// Fetch the full collection
pub async fn load_foods<A: FoodApi + ?Sized>(api: &A) -> ApiResult<Action> {
    let foods = api.list_foods().await?;
    info!("loaded {} foods", foods.len());
    Ok(Action::Loaded(foods))
}

/// Create a dish from the add form. `available` is always sent as true and
/// the backend's echo becomes the new list entry.
pub async fn add_food<A: FoodApi + ?Sized>(api: &A, patch: FoodPatch) -> ApiResult<Action> {
    let body = NewFood::from(patch);
    debug!("creating food {:?}", body.fields().name);
    let created = api.create_food(&body).await?;
    info!("created food {}", created.id);
    Ok(Action::Appended(created))
}

/// Save the edit form over the record being edited
pub async fn update_food<A: FoodApi + ?Sized>(
    api: &A,
    editing: &Food,
    patch: FoodPatch,
) -> ApiResult<Action> {
    let merged = editing.merged(&patch);
    let updated = api.update_food(editing.id, &merged).await?;
    info!("updated food {}", updated.id);
    Ok(Action::Replaced(updated))
}

/// Delete by id; the locally known id is removed once the backend acknowledges
pub async fn delete_food<A: FoodApi + ?Sized>(api: &A, id: u32) -> ApiResult<Action> {
    api.delete_food(id).await?;
    info!("deleted food {}", id);
    Ok(Action::Removed(id))
}

/// Shared failure policy for every handler: log, then hand back the text of a
/// user-visible notice. The store is left as it was.
pub fn settle(label: &str, outcome: ApiResult<Action>) -> Result<Action, String> {
    outcome.map_err(|err| {
        error!("failed to {}: {}", label, err);
        format!("Could not {}: {}", label, err)
    })
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use super::*;
    use crate::api::ApiError;
    use crate::store::DashboardState;

    #[derive(Debug, Clone, PartialEq)]
    enum Request {
        List,
        Create(Value),
        Update(u32, Value),
        Delete(u32),
    }

    /// In-memory backend that records every request
    #[derive(Default)]
    struct MockFoodApi {
        listing: Vec<Food>,
        fail: bool,
        /// Appended to names by the "server" to tell echoes from payloads
        normalize_suffix: Option<&'static str>,
        next_id: Cell<u32>,
        requests: RefCell<Vec<Request>>,
    }

    impl MockFoodApi {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn record(&self, request: Request) -> ApiResult<()> {
            self.requests.borrow_mut().push(request);
            if self.fail {
                Err(ApiError::Status {
                    status: 500,
                    url: "http://mock/foods".to_string(),
                })
            } else {
                Ok(())
            }
        }

        fn normalize(&self, mut food: Food) -> Food {
            if let Some(suffix) = self.normalize_suffix {
                food.name.push_str(suffix);
            }
            food
        }

        fn requests(&self) -> Vec<Request> {
            self.requests.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl FoodApi for MockFoodApi {
        async fn list_foods(&self) -> ApiResult<Vec<Food>> {
            self.record(Request::List)?;
            Ok(self.listing.clone())
        }

        async fn create_food(&self, food: &NewFood) -> ApiResult<Food> {
            let body = serde_json::to_value(food).unwrap();
            self.record(Request::Create(body))?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            Ok(self.normalize(Food { id, ..Food::default() }.merged(food.fields())))
        }

        async fn update_food(&self, id: u32, food: &Food) -> ApiResult<Food> {
            let body = serde_json::to_value(food).unwrap();
            self.record(Request::Update(id, body))?;
            Ok(self.normalize(food.clone()))
        }

        async fn delete_food(&self, id: u32) -> ApiResult<()> {
            self.record(Request::Delete(id))
        }
    }

    fn food(id: u32, name: &str, price: f64) -> Food {
        Food {
            id,
            name: name.to_string(),
            price,
            available: true,
            ..Default::default()
        }
    }

    fn state_with(foods: Vec<Food>) -> DashboardState {
        DashboardState::new().reduce(Action::Loaded(foods))
    }

    #[tokio::test]
    async fn test_load_populates_in_order() {
        let api = MockFoodApi {
            listing: vec![food(1, "a", 1.0), food(2, "b", 2.0)],
            ..Default::default()
        };

        let action = load_foods(&api).await.expect("load failed");
        let state = DashboardState::new().reduce(action);

        assert_eq!(state.foods, vec![food(1, "a", 1.0), food(2, "b", 2.0)]);
        assert_eq!(api.requests(), vec![Request::List]);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_list_empty() {
        let api = MockFoodApi::failing();
        let outcome = settle("load the menu", load_foods(&api).await);
        assert!(outcome.unwrap_err().starts_with("Could not load the menu"));
    }

    #[tokio::test]
    async fn test_add_forces_available_and_appends_echo() {
        let api = MockFoodApi {
            next_id: Cell::new(5),
            ..Default::default()
        };
        let patch = FoodPatch {
            name: Some("X".to_string()),
            price: Some(10.0),
            available: Some(false),
            ..Default::default()
        };

        let action = add_food(&api, patch).await.expect("create failed");
        let state = state_with(vec![food(1, "a", 1.0)]).reduce(action);

        assert_eq!(
            api.requests(),
            vec![Request::Create(json!({ "name": "X", "price": 10.0, "available": true }))]
        );
        assert_eq!(state.foods.len(), 2);
        assert_eq!(state.foods[0], food(1, "a", 1.0));
        assert_eq!(state.foods[1], food(5, "X", 10.0));
    }

    #[tokio::test]
    async fn test_add_uses_backend_response_not_payload() {
        let api = MockFoodApi {
            normalize_suffix: Some(" (house)"),
            ..Default::default()
        };
        let patch = FoodPatch {
            name: Some("Soup".to_string()),
            ..Default::default()
        };

        let action = add_food(&api, patch).await.unwrap();
        let state = DashboardState::new().reduce(action);
        assert_eq!(state.foods[0].name, "Soup (house)");
    }

    #[tokio::test]
    async fn test_add_failure_changes_nothing() {
        let api = MockFoodApi::failing();
        let state = state_with(vec![food(1, "a", 1.0)]);
        let before = state.clone();

        let outcome = settle("add the dish", add_food(&api, FoodPatch::default()).await);
        let after = match outcome {
            Ok(action) => state.reduce(action),
            Err(_) => state,
        };

        assert_eq!(api.requests().len(), 1);
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_update_merges_patch_over_editing_food() {
        let api = MockFoodApi::default();
        let editing = Food {
            id: 2,
            name: "A".to_string(),
            price: 1.0,
            ..Default::default()
        };
        let patch = FoodPatch {
            price: Some(2.0),
            ..Default::default()
        };

        let action = update_food(&api, &editing, patch).await.expect("update failed");

        assert_eq!(
            api.requests(),
            vec![Request::Update(
                2,
                json!({
                    "id": 2,
                    "name": "A",
                    "description": "",
                    "image": "",
                    "price": 2.0,
                    "available": false
                })
            )]
        );

        let state = state_with(vec![food(1, "x", 9.0), editing.clone(), food(3, "y", 9.0)]).reduce(action);
        assert_eq!(state.foods.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(state.foods[1].price, 2.0);
        assert_eq!(state.foods[0], food(1, "x", 9.0));
        assert_eq!(state.foods[2], food(3, "y", 9.0));
    }

    #[tokio::test]
    async fn test_update_replaces_with_backend_response() {
        let api = MockFoodApi {
            normalize_suffix: Some("!"),
            ..Default::default()
        };
        let editing = food(2, "A", 1.0);

        let action = update_food(&api, &editing, FoodPatch::default()).await.unwrap();
        let state = state_with(vec![editing]).reduce(action);
        assert_eq!(state.foods[0].name, "A!");
    }

    #[tokio::test]
    async fn test_update_failure_changes_nothing() {
        let api = MockFoodApi::failing();
        let editing = food(2, "A", 1.0);

        let outcome = settle(
            "update the dish",
            update_food(&api, &editing, FoodPatch::default()).await,
        );
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn test_delete_removes_after_success() {
        let api = MockFoodApi::default();
        let state = state_with(vec![food(1, "a", 1.0), food(3, "c", 3.0)]);

        let action = delete_food(&api, 3).await.expect("delete failed");
        let state = state.reduce(action);

        assert_eq!(api.requests(), vec![Request::Delete(3)]);
        assert_eq!(state.foods, vec![food(1, "a", 1.0)]);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_item() {
        let api = MockFoodApi::failing();
        let state = state_with(vec![food(1, "a", 1.0), food(3, "c", 3.0)])
            .reduce(Action::EditRequested(food(1, "a", 1.0)));
        let before = state.clone();

        let outcome = settle("delete the dish", delete_food(&api, 3).await);
        let after = match outcome {
            Ok(action) => state.reduce(action),
            Err(_) => state,
        };

        assert_eq!(after, before);
    }

    #[test]
    fn test_settle_passes_success_through() {
        let outcome = settle("delete the dish", Ok(Action::Removed(1)));
        assert_eq!(outcome, Ok(Action::Removed(1)));
    }

    #[test]
    fn test_settle_notice_text() {
        let outcome = settle("delete the dish", Err(ApiError::Network("offline".to_string())));
        assert_eq!(
            outcome,
            Err("Could not delete the dish: network error: offline".to_string())
        );
    }
}
