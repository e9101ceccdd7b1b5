//! UI Components
//!
//! Reusable Leptos components for the dashboard view.

mod delete_confirm_button;
mod food_card;
mod food_form;
mod food_list;
mod header;
mod modal;
mod modal_add_food;
mod modal_edit_food;
mod notice_banner;

pub use delete_confirm_button::DeleteConfirmButton;
pub use food_card::FoodCard;
pub use food_form::{FoodForm, FoodFormValues};
pub use food_list::FoodList;
pub use header::Header;
pub use modal::Modal;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;
pub use notice_banner::NoticeBanner;
