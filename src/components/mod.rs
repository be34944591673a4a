//! UI Components
//!
//! Reusable Leptos components.

mod confirm_modal;
mod loading;
mod pagination;
mod search_bar;
mod stat_bar;
mod status_alert;

pub use confirm_modal::ConfirmModal;
pub use loading::LoadingIndicator;
pub use pagination::Pagination;
pub use search_bar::SearchBar;
pub use stat_bar::StatBar;
pub use status_alert::StatusAlert;
