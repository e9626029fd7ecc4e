use crate::config::SidebarConfig;
use crate::viewport::{ViewportClass, ViewportSource, ViewportSubscription};

/// Width state of the persistent (desktop) sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelMode {
    #[default]
    Expanded,
    Collapsed,
}

impl PanelMode {
    pub fn toggled(self) -> Self {
        match self {
            PanelMode::Expanded => PanelMode::Collapsed,
            PanelMode::Collapsed => PanelMode::Expanded,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == PanelMode::Collapsed
    }
}

/// Snapshot of the sidebar presentation state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub panel_mode: PanelMode,
    /// Only meaningful while the viewport is mobile
    pub mobile_overlay_open: bool,
    pub viewport_class: ViewportClass,
}

/// Owns the sidebar state of one mounted layout.
///
/// Panel mode and the mobile overlay are independent controls. Whenever the
/// viewport class changes, the overlay is closed so it can never linger in
/// the new layout.
#[derive(Debug)]
pub struct SidebarController {
    state: SidebarState,
    breakpoint: f64,
    subscription: Option<ViewportSubscription>,
    /// False until a subscribed source has reported its first width
    viewport_settled: bool,
}

impl SidebarController {
    /// Controller without a viewport signal; stays on the desktop layout until
    /// widths are fed through [`observe_width`](Self::observe_width).
    pub fn detached(config: &SidebarConfig) -> Self {
        Self {
            state: SidebarState::default(),
            breakpoint: config.mobile_breakpoint,
            subscription: None,
            viewport_settled: true,
        }
    }

    /// Create a controller subscribed to `source` for its whole lifetime.
    ///
    /// If the source cannot be subscribed, the controller falls back to the
    /// desktop layout.
    pub fn mount<S>(source: &S, config: &SidebarConfig) -> Self
    where
        S: ViewportSource + ?Sized,
    {
        let mut controller = Self::detached(config);
        match source.subscribe() {
            Ok(subscription) => {
                controller.subscription = Some(subscription);
                controller.viewport_settled = false;
                // Synchronous sources report the mount-time width here. Async
                // ones (the browser) report later, until then the controller
                // is unsettled and assumes desktop.
                controller.pump_viewport();
            }
            Err(e) => {
                tracing::warn!(%e, "Viewport signal unavailable, using desktop layout");
            }
        }
        tracing::debug!(state = ?controller.state, "Sidebar controller mounted");
        controller
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn panel_mode(&self) -> PanelMode {
        self.state.panel_mode
    }

    pub fn mobile_overlay_open(&self) -> bool {
        self.state.mobile_overlay_open
    }

    pub fn viewport_class(&self) -> ViewportClass {
        self.state.viewport_class
    }

    /// The overlay is inert on desktop even if the flag was set there
    pub fn is_overlay_visible(&self) -> bool {
        self.state.mobile_overlay_open && self.state.viewport_class.is_mobile()
    }

    /// Whether the viewport class reflects an observed width (or a final
    /// fallback). Views hold back the panel until this is true.
    pub fn is_viewport_settled(&self) -> bool {
        self.viewport_settled
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(ViewportSubscription::is_active)
    }

    /// Flip between expanded and collapsed
    pub fn toggle_sidebar(&mut self) {
        self.state.panel_mode = self.state.panel_mode.toggled();
        tracing::debug!(panel_mode = ?self.state.panel_mode, "Toggled sidebar");
    }

    pub fn set_mobile_overlay_open(&mut self, open: bool) {
        if self.state.mobile_overlay_open != open {
            tracing::debug!(open, "Mobile overlay");
        }
        self.state.mobile_overlay_open = open;
    }

    pub fn close_mobile_overlay(&mut self) {
        self.set_mobile_overlay_open(false);
    }

    /// Apply a viewport width. Returns `true` if the viewport class changed.
    pub fn observe_width(&mut self, width: f64) -> bool {
        let class = ViewportClass::from_width(width, self.breakpoint);
        self.viewport_settled = true;
        if class == self.state.viewport_class {
            return false;
        }

        tracing::debug!(
            from = ?self.state.viewport_class,
            to = ?class,
            width,
            "Viewport class changed"
        );
        self.state.viewport_class = class;
        self.state.mobile_overlay_open = false;
        true
    }

    /// Apply all queued viewport widths in arrival order.
    ///
    /// Returns the number of widths applied.
    pub fn pump_viewport(&mut self) -> usize {
        let Some(subscription) = self.subscription.as_mut() else {
            return 0;
        };
        let widths: Vec<f64> = std::iter::from_fn(|| subscription.try_next()).collect();
        for width in &widths {
            self.observe_width(*width);
        }
        widths.len()
    }

    /// Release the viewport subscription while keeping the state readable.
    ///
    /// Used by owners that cannot move the controller out (e.g. a signal).
    pub fn release_viewport(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.release();
        }
        self.viewport_settled = true;
    }

    /// Release the viewport subscription and discard the state
    pub fn teardown(mut self) {
        self.release_viewport();
        tracing::debug!("Sidebar controller torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::ViewportError;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use tokio::sync::mpsc::{self, UnboundedSender};

    const MOBILE: f64 = 375.0;
    const DESKTOP: f64 = 1280.0;

    /// Viewport source that counts subscribe/unsubscribe calls
    #[derive(Default)]
    struct MockViewport {
        initial_width: Option<f64>,
        unavailable: bool,
        subscribes: Cell<usize>,
        unsubscribes: Rc<Cell<usize>>,
        sender: RefCell<Option<UnboundedSender<f64>>>,
    }

    impl MockViewport {
        fn with_width(width: f64) -> Self {
            Self {
                initial_width: Some(width),
                ..Default::default()
            }
        }

        fn emit(&self, width: f64) {
            if let Some(sender) = self.sender.borrow().as_ref() {
                let _ = sender.send(width);
            }
        }
    }

    impl ViewportSource for MockViewport {
        fn subscribe(&self) -> Result<ViewportSubscription, ViewportError> {
            if self.unavailable {
                return Err(ViewportError::Unavailable("mock".to_string()));
            }
            self.subscribes.set(self.subscribes.get() + 1);

            let (tx, rx) = mpsc::unbounded_channel();
            if let Some(width) = self.initial_width {
                tx.send(width).unwrap();
            }
            *self.sender.borrow_mut() = Some(tx);

            let unsubscribes = self.unsubscribes.clone();
            Ok(ViewportSubscription::new(rx, move || {
                unsubscribes.set(unsubscribes.get() + 1)
            }))
        }
    }

    #[test]
    fn test_initial_state() {
        let source = MockViewport::with_width(DESKTOP);
        let controller = SidebarController::mount(&source, &SidebarConfig::default());

        assert_eq!(controller.panel_mode(), PanelMode::Expanded);
        assert!(!controller.mobile_overlay_open());
        assert_eq!(controller.viewport_class(), ViewportClass::Desktop);
        assert!(controller.is_subscribed());
    }

    #[test]
    fn test_initial_viewport_class_from_mount_width() {
        let source = MockViewport::with_width(MOBILE);
        let controller = SidebarController::mount(&source, &SidebarConfig::default());

        assert_eq!(controller.viewport_class(), ViewportClass::Mobile);
        assert!(!controller.mobile_overlay_open());
    }

    #[test]
    fn test_unavailable_signal_defaults_to_desktop() {
        let source = MockViewport {
            unavailable: true,
            ..Default::default()
        };
        let mut controller = SidebarController::mount(&source, &SidebarConfig::default());

        assert_eq!(controller.viewport_class(), ViewportClass::Desktop);
        assert!(!controller.is_subscribed());
        assert_eq!(controller.pump_viewport(), 0);

        // Still fully operable
        controller.toggle_sidebar();
        assert_eq!(controller.panel_mode(), PanelMode::Collapsed);
        controller.teardown();
        assert_eq!(source.unsubscribes.get(), 0);
    }

    #[test]
    fn test_toggle_twice_restores_panel_mode() {
        let mut controller = SidebarController::detached(&SidebarConfig::default());
        let original = controller.panel_mode();

        controller.toggle_sidebar();
        assert_eq!(controller.panel_mode(), PanelMode::Collapsed);
        controller.toggle_sidebar();
        assert_eq!(controller.panel_mode(), original);
    }

    #[test]
    fn test_toggle_does_not_touch_overlay() {
        let source = MockViewport::with_width(MOBILE);
        let mut controller = SidebarController::mount(&source, &SidebarConfig::default());

        controller.set_mobile_overlay_open(true);
        controller.toggle_sidebar();

        assert!(controller.mobile_overlay_open());
        assert_eq!(controller.panel_mode(), PanelMode::Collapsed);
    }

    #[test]
    fn test_mobile_to_desktop_closes_overlay() {
        let source = MockViewport::with_width(MOBILE);
        let mut controller = SidebarController::mount(&source, &SidebarConfig::default());
        controller.set_mobile_overlay_open(true);
        assert!(controller.is_overlay_visible());

        // Intervening toggles must not matter
        controller.toggle_sidebar();
        controller.toggle_sidebar();
        controller.toggle_sidebar();

        source.emit(DESKTOP);
        assert_eq!(controller.pump_viewport(), 1);

        assert_eq!(controller.viewport_class(), ViewportClass::Desktop);
        assert!(!controller.mobile_overlay_open());
        assert!(!controller.is_overlay_visible());
        assert_eq!(controller.panel_mode(), PanelMode::Collapsed);
    }

    #[test]
    fn test_desktop_to_mobile_closes_overlay() {
        let source = MockViewport::with_width(DESKTOP);
        let mut controller = SidebarController::mount(&source, &SidebarConfig::default());

        // Flag set while on desktop is inert
        controller.set_mobile_overlay_open(true);
        assert!(!controller.is_overlay_visible());

        source.emit(MOBILE);
        controller.pump_viewport();

        assert_eq!(controller.viewport_class(), ViewportClass::Mobile);
        assert!(!controller.mobile_overlay_open());
        assert!(!controller.is_overlay_visible());
    }

    #[test]
    fn test_resize_within_class_keeps_overlay() {
        let source = MockViewport::with_width(MOBILE);
        let mut controller = SidebarController::mount(&source, &SidebarConfig::default());
        controller.set_mobile_overlay_open(true);

        source.emit(400.0);
        source.emit(500.0);
        assert_eq!(controller.pump_viewport(), 2);

        assert!(controller.is_overlay_visible());
    }

    #[test]
    fn test_round_trip_through_desktop_leaves_overlay_closed() {
        let source = MockViewport::with_width(MOBILE);
        let mut controller = SidebarController::mount(&source, &SidebarConfig::default());
        controller.set_mobile_overlay_open(true);

        source.emit(DESKTOP);
        source.emit(MOBILE);
        controller.pump_viewport();

        assert_eq!(controller.viewport_class(), ViewportClass::Mobile);
        assert!(!controller.mobile_overlay_open());
    }

    #[test]
    fn test_custom_breakpoint() {
        let config = SidebarConfig {
            mobile_breakpoint: 1024.0,
            ..Default::default()
        };
        let mut controller = SidebarController::detached(&config);

        assert!(controller.observe_width(900.0));
        assert_eq!(controller.viewport_class(), ViewportClass::Mobile);
        assert!(!controller.observe_width(1000.0));
        assert!(controller.observe_width(1024.0));
        assert_eq!(controller.viewport_class(), ViewportClass::Desktop);
    }

    #[test]
    fn test_teardown_unsubscribes_exactly_once() {
        let source = MockViewport::with_width(DESKTOP);
        let controller = SidebarController::mount(&source, &SidebarConfig::default());
        assert_eq!(source.subscribes.get(), 1);
        assert_eq!(source.unsubscribes.get(), 0);

        controller.teardown();
        assert_eq!(source.unsubscribes.get(), 1);

        // Events after teardown go nowhere
        source.emit(MOBILE);
        assert_eq!(source.unsubscribes.get(), 1);
    }

    #[test]
    fn test_drop_unsubscribes_exactly_once() {
        let source = MockViewport::with_width(DESKTOP);
        {
            let _controller = SidebarController::mount(&source, &SidebarConfig::default());
        }
        assert_eq!(source.subscribes.get(), 1);
        assert_eq!(source.unsubscribes.get(), 1);
    }

    #[test]
    fn test_unsettled_until_first_width_arrives() {
        let source = MockViewport::default();
        let mut controller = SidebarController::mount(&source, &SidebarConfig::default());

        assert!(!controller.is_viewport_settled());
        assert_eq!(controller.viewport_class(), ViewportClass::Desktop);

        source.emit(MOBILE);
        controller.pump_viewport();

        assert!(controller.is_viewport_settled());
        assert_eq!(controller.viewport_class(), ViewportClass::Mobile);
    }

    #[test]
    fn test_settled_without_signal() {
        let detached = SidebarController::detached(&SidebarConfig::default());
        assert!(detached.is_viewport_settled());

        let source = MockViewport {
            unavailable: true,
            ..Default::default()
        };
        let degraded = SidebarController::mount(&source, &SidebarConfig::default());
        assert!(degraded.is_viewport_settled());

        let source = MockViewport::with_width(MOBILE);
        let mounted = SidebarController::mount(&source, &SidebarConfig::default());
        assert!(mounted.is_viewport_settled());
    }

    #[test]
    fn test_release_viewport_then_drop_unsubscribes_once() {
        let source = MockViewport::with_width(MOBILE);
        let mut controller = SidebarController::mount(&source, &SidebarConfig::default());
        controller.set_mobile_overlay_open(true);

        controller.release_viewport();
        assert!(!controller.is_subscribed());
        assert_eq!(source.unsubscribes.get(), 1);

        // State stays readable and later events are ignored
        source.emit(DESKTOP);
        assert_eq!(controller.pump_viewport(), 0);
        assert!(controller.is_overlay_visible());

        controller.release_viewport();
        drop(controller);
        assert_eq!(source.unsubscribes.get(), 1);
    }

    #[test]
    fn test_remount_does_not_leak_subscriptions() {
        let source = MockViewport::with_width(DESKTOP);
        for _ in 0..3 {
            let controller = SidebarController::mount(&source, &SidebarConfig::default());
            controller.teardown();
        }
        assert_eq!(source.subscribes.get(), 3);
        assert_eq!(source.unsubscribes.get(), 3);
    }
}
