//! Dioxus views over the pagination and sidebar state.

pub mod app;
pub mod club_directory;
pub mod pagination;
pub mod sidebar;

pub use app::App;
