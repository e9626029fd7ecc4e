use dioxus::prelude::*;

use super::app::Section;
use crate::config::Config;
use crate::state::SidebarController;
use crate::viewport::BrowserViewport;

/// Page shell with the navigation sidebar.
///
/// Provides the layout's `Signal<SidebarController>` as context. The controller
/// (and with it the viewport subscription) lives exactly as long as this
/// component is mounted.
///
/// The navigation chrome is held back until the first viewport width arrives,
/// so mobile users never see a frame of the desktop panel.
#[component]
pub fn SidebarLayout(children: Element) -> Element {
    let config = use_context::<Config>();
    let revision = use_signal(|| 0_u64);
    let mut controller = use_context_provider({
        let sidebar_config = config.sidebar.clone();
        move || {
            let source = BrowserViewport::new(revision);
            Signal::new(SidebarController::mount(&source, &sidebar_config))
        }
    });

    // Drain viewport events whenever the browser source reports a new width
    use_effect(move || {
        let _ = revision.read();
        controller.write().pump_viewport();
    });

    // Release the resize listener when the layout unmounts
    use_drop(move || {
        if let Ok(mut controller) = controller.try_write() {
            controller.release_viewport();
        }
    });

    let (state, overlay_visible, settled) = {
        let controller = controller.read();
        (
            controller.state(),
            controller.is_overlay_visible(),
            controller.is_viewport_settled(),
        )
    };
    let is_mobile = state.viewport_class.is_mobile();
    let collapsed = !is_mobile && state.panel_mode.is_collapsed();
    let width = if collapsed {
        config.sidebar.collapsed_width
    } else {
        config.sidebar.expanded_width
    };

    rsx! {
        div {
            class: "layout",
            class: if is_mobile { "mobile" } else { "desktop" },

            if settled {
                if is_mobile {
                    header {
                        class: "mobile-bar",
                        button {
                            class: "mobile-trigger",
                            aria_label: "Open navigation",
                            onclick: move |_| controller.write().set_mobile_overlay_open(true),
                            "☰"
                        }
                        span { class: "brand", "V-Connect" }
                    }
                }

                // Tapping outside the panel dismisses the overlay
                if overlay_visible {
                    div {
                        class: "overlay-backdrop",
                        onclick: move |_| controller.write().close_mobile_overlay(),
                    }
                }

                aside {
                    class: "sidebar",
                    class: if collapsed { "collapsed" },
                    class: if overlay_visible { "overlay-open" },
                    style: "width: {width}px;",

                    div {
                        class: "sidebar-header",
                        if !collapsed {
                            span { class: "brand", "V-Connect" }
                        }
                        if !is_mobile {
                            button {
                                class: "sidebar-toggle",
                                aria_label: "Toggle sidebar",
                                onclick: move |_| controller.write().toggle_sidebar(),
                                if collapsed { "»" } else { "«" }
                            }
                        }
                    }

                    SidebarNav { collapsed }
                }
            }

            main { class: "content", {children} }
        }
    }
}

#[component]
fn SidebarNav(collapsed: bool) -> Element {
    let mut section = use_context::<Signal<Section>>();
    let mut controller = use_context::<Signal<SidebarController>>();
    let active = *section.read();

    let entries = Section::ALL.into_iter().map(move |entry| {
        let label = entry.label();
        let glyph = entry.glyph();
        rsx! {
            button {
                key: "{label}",
                class: "nav-entry",
                class: if entry == active { "active" },
                title: label,
                onclick: move |_| {
                    section.set(entry);
                    // Selecting a destination dismisses the mobile overlay
                    controller.write().close_mobile_overlay();
                },
                span { class: "nav-glyph", "{glyph}" }
                if !collapsed {
                    span { class: "nav-label", "{label}" }
                }
            }
        }
    });

    rsx! {
        nav { class: "sidebar-nav", {entries} }
    }
}
