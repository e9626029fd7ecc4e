//! Per-layout UI state.

mod sidebar;
pub use sidebar::{PanelMode, SidebarController, SidebarState};
