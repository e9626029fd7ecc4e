use dioxus::prelude::*;

use super::pagination::Pagination;
use crate::config::Config;
use crate::pagination::{page_range, PageNumber};

/// Campus clubs shown in the directory: (name, category)
const CLUBS: &[(&str, &str)] = &[
    ("Robotics Society", "Technology"),
    ("Open Source Circle", "Technology"),
    ("Competitive Programming Club", "Technology"),
    ("AI Reading Group", "Technology"),
    ("Photography Collective", "Arts"),
    ("Drama Society", "Arts"),
    ("Fine Arts Club", "Arts"),
    ("Film Appreciation Society", "Arts"),
    ("Western Music Club", "Music"),
    ("Classical Music Circle", "Music"),
    ("A Cappella Group", "Music"),
    ("Debate Union", "Literary"),
    ("Creative Writing Club", "Literary"),
    ("Quiz Club", "Literary"),
    ("Model United Nations", "Literary"),
    ("Football Club", "Sports"),
    ("Chess Club", "Sports"),
    ("Trekking and Mountaineering", "Sports"),
    ("Badminton Club", "Sports"),
    ("Entrepreneurship Cell", "Professional"),
    ("Finance and Investment Club", "Professional"),
    ("Community Service League", "Social"),
    ("Environment Club", "Social"),
];

#[component]
pub fn ClubDirectory() -> Element {
    let config = use_context::<Config>();
    let mut page = use_signal(|| PageNumber::FIRST);

    let page_size = config.pagination.page_size;
    let current_page = *page.read();
    let range = match page_range(CLUBS.len(), page_size, current_page) {
        Ok(range) => range,
        Err(e) => {
            tracing::error!(%e, page_size, "Cannot slice club directory");
            0..0
        }
    };
    let total = CLUBS.len();

    let clubs = CLUBS[range].iter().map(|(name, category)| {
        rsx! {
            li {
                key: "{name}",
                class: "club-card",
                h3 { "{name}" }
                span { class: "club-category", "{category}" }
            }
        }
    });

    rsx! {
        section {
            class: "club-directory",
            h2 { "Clubs" }
            p { class: "club-count", "{total} clubs" }
            ul { class: "club-list", {clubs} }
            Pagination {
                total_items: total,
                page_size,
                current_page,
                max_visible_pages: config.pagination.max_visible_pages,
                on_page_change: move |target| page.set(target),
            }
        }
    }
}
