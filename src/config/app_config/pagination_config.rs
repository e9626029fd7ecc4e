use serde::{Deserialize, Serialize};

use crate::pagination::DEFAULT_MAX_VISIBLE_PAGES;

/// Default number of items per page in list views
pub const DEFAULT_PAGE_SIZE: usize = 10;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_visible_pages() -> usize {
    DEFAULT_MAX_VISIBLE_PAGES
}

/// Configuration for paginated list views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Contiguous page links shown around the current page
    #[serde(default = "default_max_visible_pages")]
    pub max_visible_pages: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_visible_pages: default_max_visible_pages(),
        }
    }
}

impl PaginationConfig {
    /// Zero values from a user file fall back to defaults
    pub fn normalized(self) -> Self {
        Self {
            page_size: if self.page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                self.page_size
            },
            max_visible_pages: if self.max_visible_pages == 0 {
                DEFAULT_MAX_VISIBLE_PAGES
            } else {
                self.max_visible_pages
            },
        }
    }
}
