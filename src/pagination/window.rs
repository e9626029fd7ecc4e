use std::fmt;

use super::page::{total_pages, PageNumber};
use super::{PaginationError, PaginationResult};

/// Number of contiguous page links shown around the current page
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// A single slot in the rendered page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Number(PageNumber),
    Ellipsis,
}

impl PageEntry {
    pub fn page(self) -> Option<PageNumber> {
        match self {
            PageEntry::Number(page) => Some(page),
            PageEntry::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEntry::Number(page) => write!(f, "{page}"),
            PageEntry::Ellipsis => f.write_str("…"),
        }
    }
}

/// Inputs of a page-window computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub total_items: usize,
    pub page_size: usize,
    /// One-based; must be within `1..=total_pages` once there is more than one page
    pub current_page: usize,
    pub max_visible_pages: usize,
}

impl PageRequest {
    pub fn new(total_items: usize, page_size: usize, current_page: usize) -> Self {
        Self {
            total_items,
            page_size,
            current_page,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
        }
    }

    pub fn with_max_visible_pages(mut self, max_visible_pages: usize) -> Self {
        self.max_visible_pages = max_visible_pages;
        self
    }
}

/// Page links to render for a collection spanning more than one page.
///
/// `previous` and `next` are `None` when the matching control is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    entries: Vec<PageEntry>,
    total_pages: usize,
    current: PageNumber,
    previous: Option<PageNumber>,
    next: Option<PageNumber>,
}

impl PageWindow {
    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn current(&self) -> PageNumber {
        self.current
    }

    /// Target of the "previous" control, if enabled
    pub fn previous(&self) -> Option<PageNumber> {
        self.previous
    }

    /// Target of the "next" control, if enabled
    pub fn next(&self) -> Option<PageNumber> {
        self.next
    }

    pub fn is_prev_disabled(&self) -> bool {
        self.previous.is_none()
    }

    pub fn is_next_disabled(&self) -> bool {
        self.next.is_none()
    }

    /// Page numbers in display order, skipping ellipsis markers
    pub fn page_numbers(&self) -> impl Iterator<Item = PageNumber> + '_ {
        self.entries.iter().filter_map(|entry| entry.page())
    }

    pub fn contains(&self, page: PageNumber) -> bool {
        self.page_numbers().any(|p| p == page)
    }

    /// Validate an arbitrary page request (e.g. typed into a jump field).
    pub fn target(&self, page: usize) -> Option<PageNumber> {
        PageNumber::new(page).filter(|p| p.get() <= self.total_pages)
    }
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(self.entries.len() + 2);
        if !self.is_prev_disabled() {
            parts.push("‹".to_string());
        }
        parts.extend(self.entries.iter().map(|entry| match entry {
            PageEntry::Number(page) if *page == self.current => format!("[{page}]"),
            entry => entry.to_string(),
        }));
        if !self.is_next_disabled() {
            parts.push("›".to_string());
        }
        f.write_str(&parts.join(" "))
    }
}

/// Compute the page strip for `request`.
///
/// Returns `Ok(None)` when everything fits on a single page, in which case no
/// pagination controls should be rendered at all.
pub fn compute_page_window(request: &PageRequest) -> PaginationResult<Option<PageWindow>> {
    let total = total_pages(request.total_items, request.page_size)?;
    let max_visible = request.max_visible_pages;
    if max_visible == 0 {
        return Err(PaginationError::ZeroVisiblePages);
    }
    if total <= 1 {
        return Ok(None);
    }

    let current = PageNumber::new(request.current_page)
        .filter(|page| page.get() <= total)
        .ok_or(PaginationError::PageOutOfRange {
            page: request.current_page,
            total_pages: total,
        })?;

    let (start, end) = visible_span(current.get(), total, max_visible);

    let mut entries = Vec::with_capacity(end - start + 5);
    if start > 1 {
        entries.push(PageEntry::Number(PageNumber::FIRST));
        if start > 2 {
            entries.push(PageEntry::Ellipsis);
        }
    }
    entries.extend((start..=end).map(|page| PageEntry::Number(PageNumber::saturating(page))));
    if end < total {
        if end < total - 1 {
            entries.push(PageEntry::Ellipsis);
        }
        entries.push(PageEntry::Number(PageNumber::saturating(total)));
    }

    let window = PageWindow {
        entries,
        total_pages: total,
        current,
        previous: (current.get() > 1).then(|| PageNumber::saturating(current.get() - 1)),
        next: (current.get() < total).then(|| PageNumber::saturating(current.get() + 1)),
    };
    tracing::trace!(%window, ?request, "Computed page window");
    Ok(Some(window))
}

/// Contiguous `start..=end` run centered on `current`, re-anchored when it
/// hits the last page so it still holds `max_visible` pages where possible.
fn visible_span(current: usize, total: usize, max_visible: usize) -> (usize, usize) {
    let half = max_visible / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = start.saturating_add(max_visible - 1).min(total);
    if end - start + 1 < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }
    (start, end)
}
