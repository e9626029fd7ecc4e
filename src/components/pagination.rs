use dioxus::prelude::*;

use crate::pagination::{
    compute_page_window, PageEntry, PageNumber, PageRequest, DEFAULT_MAX_VISIBLE_PAGES,
};

/// Page links for a paginated collection.
///
/// Renders nothing when the collection fits on one page. Disabled
/// previous/next controls carry no handler, so `on_page_change` only ever
/// receives pages taken from the computed window.
#[component]
pub fn Pagination(
    total_items: usize,
    page_size: usize,
    current_page: PageNumber,
    #[props(default = DEFAULT_MAX_VISIBLE_PAGES)] max_visible_pages: usize,
    on_page_change: EventHandler<PageNumber>,
) -> Element {
    let request = PageRequest::new(total_items, page_size, current_page.get())
        .with_max_visible_pages(max_visible_pages);
    let window = match compute_page_window(&request) {
        Ok(Some(window)) => window,
        Ok(None) => return rsx! {},
        Err(e) => {
            tracing::error!(%e, ?request, "Invalid pagination input");
            return rsx! {};
        }
    };

    let current = window.current();
    let total_pages = window.total_pages();

    let previous = match window.previous() {
        Some(target) => rsx! {
            button {
                class: "page-link page-prev",
                aria_label: "Previous page",
                onclick: move |_| on_page_change.call(target),
                "‹"
            }
        },
        None => rsx! {
            span { class: "page-link page-prev disabled", aria_disabled: "true", "‹" }
        },
    };

    let next = match window.next() {
        Some(target) => rsx! {
            button {
                class: "page-link page-next",
                aria_label: "Next page",
                onclick: move |_| on_page_change.call(target),
                "›"
            }
        },
        None => rsx! {
            span { class: "page-link page-next disabled", aria_disabled: "true", "›" }
        },
    };

    let entries = window
        .entries()
        .iter()
        .copied()
        .enumerate()
        .map(move |(index, entry)| match entry {
            PageEntry::Number(page) if page == current => rsx! {
                span { key: "{index}", class: "page-link current", aria_current: "page", "{page}" }
            },
            PageEntry::Number(page) => rsx! {
                button {
                    key: "{index}",
                    class: "page-link",
                    onclick: move |_| on_page_change.call(page),
                    "{page}"
                }
            },
            PageEntry::Ellipsis => rsx! {
                span { key: "{index}", class: "page-ellipsis", "…" }
            },
        });

    rsx! {
        nav {
            class: "pagination",
            aria_label: "Page {current} of {total_pages}",
            {previous}
            {entries}
            {next}
        }
    }
}
