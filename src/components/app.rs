use dioxus::prelude::*;

use super::club_directory::ClubDirectory;
use super::sidebar::SidebarLayout;
use crate::config;

const STYLE: &str = indoc::indoc! {r#"
    body { margin: 0; font-family: system-ui, sans-serif; }
    .layout { display: flex; min-height: 100vh; }
    .layout.mobile { flex-direction: column; }
    .sidebar { background: #1f2937; color: #f9fafb; transition: width 0.2s ease; overflow: hidden; }
    .sidebar-header { display: flex; align-items: center; justify-content: space-between; padding: 12px; }
    .sidebar-nav { display: flex; flex-direction: column; }
    .nav-entry { display: flex; gap: 12px; padding: 10px 16px; background: none; border: none; color: inherit; cursor: pointer; text-align: left; }
    .nav-entry.active { background: #374151; }
    .sidebar.collapsed .nav-entry { justify-content: center; }
    .mobile-bar { display: flex; align-items: center; gap: 12px; padding: 8px 12px; background: #1f2937; color: #f9fafb; }
    .layout.mobile .sidebar { position: fixed; top: 0; bottom: 0; left: 0; transform: translateX(-100%); z-index: 20; }
    .layout.mobile .sidebar.overlay-open { transform: translateX(0); }
    .overlay-backdrop { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); z-index: 10; }
    .content { flex: 1; padding: 24px; }
    .club-list { list-style: none; padding: 0; display: grid; gap: 12px; }
    .club-card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px; }
    .club-category { color: #6b7280; font-size: 0.875rem; }
    .pagination { display: flex; gap: 4px; align-items: center; margin-top: 16px; }
    .page-link { min-width: 32px; padding: 4px 8px; border: 1px solid #d1d5db; border-radius: 4px; background: white; cursor: pointer; text-align: center; }
    .page-link.current { background: #2563eb; color: white; border-color: #2563eb; }
    .page-link.disabled { opacity: 0.4; cursor: default; }
    .page-ellipsis { padding: 0 4px; color: #6b7280; }
"#};

/// Top-level destinations reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Clubs,
    Institutes,
    Feedback,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Clubs,
        Section::Institutes,
        Section::Feedback,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Clubs => "Clubs",
            Section::Institutes => "Institutes",
            Section::Feedback => "Feedback",
        }
    }

    /// Shown alone on the collapsed rail
    pub fn glyph(self) -> &'static str {
        match self {
            Section::Dashboard => "⌂",
            Section::Clubs => "♣",
            Section::Institutes => "⌘",
            Section::Feedback => "✎",
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(config::current);
    let section = use_context_provider(|| Signal::new(Section::Clubs));

    let content = match *section.read() {
        Section::Clubs => rsx! { ClubDirectory {} },
        other => rsx! { SectionPlaceholder { section: other } },
    };

    rsx! {
        style { "{STYLE}" }
        SidebarLayout { {content} }
    }
}

/// Sections backed by the GraphQL API, which this client does not bundle
#[component]
fn SectionPlaceholder(section: Section) -> Element {
    let label = section.label();
    rsx! {
        section {
            class: "section-placeholder",
            h2 { "{label}" }
            p { "This section is loaded from the V-Connect API." }
        }
    }
}
