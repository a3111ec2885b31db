//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod item_edit_modal;
mod lookup_screen;
mod modal;
mod new_item_modal;
mod orderable_list;
mod sidebar;
mod status_badge;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_edit_modal::ItemEditModal;
pub use lookup_screen::LookupScreen;
pub use modal::Modal;
pub use new_item_modal::NewItemModal;
pub use orderable_list::OrderableList;
pub use sidebar::Sidebar;
pub use status_badge::{show_status, StatusBadge};
