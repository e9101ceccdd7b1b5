//! Dashboard Context
//!
//! Shared handles provided via Leptos Context API: the store, the current
//! notice and the backend client. Event handlers in the components call the
//! methods here, which run the async handlers and apply their outcome.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::api::{ApiResult, RestFoodApi};
use crate::config::AppConfig;
use crate::handlers;
use crate::models::{Food, FoodPatch};
use crate::store::{store_dispatch, Action, DashboardStateStoreFields, DashboardStore};

/// Notices hide themselves after this long
const NOTICE_TIMEOUT_MS: u32 = 6_000;

/// User-visible failure message
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub seq: u32,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub store: DashboardStore,
    /// Current notice - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Current notice - write
    set_notice: WriteSignal<Option<Notice>>,
    notice_seq: StoredValue<u32>,
    /// Built once per view activation; fetch futures are not `Send`
    api: StoredValue<RestFoodApi, LocalStorage>,
}

impl DashboardContext {
    pub fn new(store: DashboardStore, config: AppConfig) -> Self {
        let (notice, set_notice) = signal::<Option<Notice>>(None);
        Self {
            store,
            notice,
            set_notice,
            notice_seq: StoredValue::new(0),
            api: StoredValue::new_local(RestFoodApi::new(config.api_base_url)),
        }
    }

    /// Cheap clone of the shared client (`reqwest::Client` is reference counted)
    fn api(&self) -> Option<RestFoodApi> {
        let api = self.api.try_get_value();
        if api.is_none() {
            warn!("dashboard closed, dropping request");
        }
        api
    }

    /// Apply a handler outcome: dispatch on success, notice on failure
    fn finish(&self, label: &str, outcome: ApiResult<Action>) {
        match handlers::settle(label, outcome) {
            Ok(action) => {
                if !store_dispatch(&self.store, action) {
                    warn!("dashboard closed before {} finished", label);
                }
            }
            Err(message) => self.show_notice(message),
        }
    }

    /// Populate the list from the backend
    pub fn load(&self) {
        let Some(api) = self.api() else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            let outcome = handlers::load_foods(&api).await;
            ctx.finish("load the menu", outcome);
        });
    }

    pub fn add_food(&self, patch: FoodPatch) {
        let Some(api) = self.api() else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            let outcome = handlers::add_food(&api, patch).await;
            ctx.finish("add the dish", outcome);
        });
    }

    /// Submit the edit form against the dish currently being edited.
    /// Returns false if nothing was sent.
    pub fn update_food(&self, patch: FoodPatch) -> bool {
        let Some(editing) = self.store.editing_food().get_untracked() else {
            warn!("edit submitted with no dish selected, ignoring");
            return false;
        };
        let Some(api) = self.api() else {
            return false;
        };
        let ctx = *self;
        spawn_local(async move {
            let outcome = handlers::update_food(&api, &editing, patch).await;
            ctx.finish("update the dish", outcome);
        });
        true
    }

    pub fn delete_food(&self, id: u32) {
        let Some(api) = self.api() else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            let outcome = handlers::delete_food(&api, id).await;
            ctx.finish("delete the dish", outcome);
        });
    }

    /// Open the edit modal on this dish
    pub fn edit_food(&self, food: Food) {
        store_dispatch(&self.store, Action::EditRequested(food));
    }

    pub fn toggle_add_modal(&self) {
        store_dispatch(&self.store, Action::ToggleAddModal);
    }

    pub fn toggle_edit_modal(&self) {
        store_dispatch(&self.store, Action::ToggleEditModal);
    }

    pub fn show_notice(&self, message: String) {
        let Some(seq) = self.notice_seq.try_update_value(|seq| {
            *seq += 1;
            *seq
        }) else {
            return;
        };
        self.set_notice.try_set(Some(Notice { seq, message }));

        let notice = self.notice;
        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            let expired = notice
                .try_with_untracked(|current| should_dismiss(current.as_ref(), seq))
                .unwrap_or(false);
            if expired {
                set_notice.try_set(None);
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}

/// A timer may only clear the notice it was started for; a newer notice owns
/// the banner until its own timer fires.
fn should_dismiss(current: Option<&Notice>, seq: u32) -> bool {
    current.is_some_and(|notice| notice.seq == seq)
}

/// Get the dashboard context
pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext should be provided")
}
