//! UI Components
//!
//! Reusable Leptos components.

mod auth_field;
mod delete_confirm_button;
mod navigation;
mod popup;
mod task_card;
mod task_form;
mod task_stats;

pub use auth_field::{AuthField, LOCK_ICON, MAIL_ICON, USER_ICON};
pub use delete_confirm_button::DeleteConfirmButton;
pub use navigation::Navigation;
pub use popup::{flash, Popup, PopupMessage};
pub use task_card::TaskCard;
pub use task_form::TaskForm;
pub use task_stats::TaskStats;
