use serde::{Deserialize, Serialize};

mod pagination_config;
mod sidebar_config;

pub use pagination_config::{PaginationConfig, DEFAULT_PAGE_SIZE};
pub use sidebar_config::{SidebarConfig, DEFAULT_COLLAPSED_WIDTH, DEFAULT_EXPANDED_WIDTH};

/// Global application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub sidebar: SidebarConfig,
    pub pagination: PaginationConfig,
}

impl Config {
    pub fn normalized(self) -> Self {
        Self {
            sidebar: self.sidebar.normalized(),
            pagination: self.pagination.normalized(),
        }
    }
}
