use serde::{Deserialize, Serialize};

use crate::viewport::DEFAULT_MOBILE_BREAKPOINT;

/// Default expanded sidebar width in pixels
pub const DEFAULT_EXPANDED_WIDTH: f64 = 260.0;

/// Default width of the collapsed icon rail in pixels
pub const DEFAULT_COLLAPSED_WIDTH: f64 = 72.0;

fn default_mobile_breakpoint() -> f64 {
    DEFAULT_MOBILE_BREAKPOINT
}

fn default_expanded_width() -> f64 {
    DEFAULT_EXPANDED_WIDTH
}

fn default_collapsed_width() -> f64 {
    DEFAULT_COLLAPSED_WIDTH
}

/// Configuration for the navigation sidebar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarConfig {
    /// Viewport widths below this are treated as mobile
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f64,
    #[serde(default = "default_expanded_width")]
    pub expanded_width: f64,
    #[serde(default = "default_collapsed_width")]
    pub collapsed_width: f64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
            expanded_width: default_expanded_width(),
            collapsed_width: default_collapsed_width(),
        }
    }
}

impl SidebarConfig {
    /// Replace unusable values (non-finite or non-positive) with defaults
    pub fn normalized(self) -> Self {
        fn positive_or(value: f64, fallback: f64) -> f64 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        }
        Self {
            mobile_breakpoint: positive_or(self.mobile_breakpoint, DEFAULT_MOBILE_BREAKPOINT),
            expanded_width: positive_or(self.expanded_width, DEFAULT_EXPANDED_WIDTH),
            collapsed_width: positive_or(self.collapsed_width, DEFAULT_COLLAPSED_WIDTH),
        }
    }
}
