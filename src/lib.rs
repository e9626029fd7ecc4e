//! V-Connect client core: page-window computation, responsive sidebar state
//! and the Dioxus components that render them.

pub mod components;
pub mod config;
pub mod pagination;
pub mod state;
pub mod viewport;
