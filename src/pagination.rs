//! Page-window shaping for paginated collections.
//!
//! Everything here is pure computation. Views render the [`PageWindow`] and
//! only ever emit page numbers taken from it, so a disabled control has no
//! target to navigate to.

mod page;
mod window;

pub use page::{page_range, total_pages, PageNumber};
pub use window::{
    compute_page_window, PageEntry, PageRequest, PageWindow, DEFAULT_MAX_VISIBLE_PAGES,
};

use thiserror::Error;

/// Caller contract violations. These are programming errors, so inputs are
/// rejected instead of clamped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("at least one page number must be visible")]
    ZeroVisiblePages,
    #[error("page {page} is outside of 1..={total_pages}")]
    PageOutOfRange { page: usize, total_pages: usize },
}

type PaginationResult<T> = Result<T, PaginationError>;
