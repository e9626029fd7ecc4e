use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;

use super::{PaginationError, PaginationResult};

/// A one-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroUsize::MIN);

    /// Returns `None` for page zero
    pub fn new(page: usize) -> Option<Self> {
        NonZeroUsize::new(page).map(Self)
    }

    /// Only for values already known to be within `1..=total_pages`.
    pub(super) fn saturating(page: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(page.saturating_sub(1)))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute the number of pages for a paginated collection.
pub fn total_pages(total_items: usize, page_size: usize) -> PaginationResult<usize> {
    if page_size == 0 {
        return Err(PaginationError::ZeroPageSize);
    }
    Ok(total_items.div_ceil(page_size))
}

/// Item index range displayed on `page`.
///
/// Pages past the end yield an empty range at `total_items`.
pub fn page_range(
    total_items: usize,
    page_size: usize,
    page: PageNumber,
) -> PaginationResult<Range<usize>> {
    if page_size == 0 {
        return Err(PaginationError::ZeroPageSize);
    }
    let start = (page.get() - 1)
        .saturating_mul(page_size)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    Ok(start..end)
}
