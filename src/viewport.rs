//! Viewport-class signal.
//!
//! A [`ViewportSource`] reports viewport widths through a
//! [`ViewportSubscription`]. Consumers classify widths into a
//! [`ViewportClass`] against a breakpoint and release the subscription when
//! they go away.

mod browser;

pub use browser::BrowserViewport;

use std::fmt;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;

/// Canonical mobile/desktop breakpoint in CSS pixels
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;

/// Coarse layout category derived from the viewport width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Widths below `breakpoint` are mobile. Unusable widths fall back to desktop.
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width.is_finite() && width < breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == ViewportClass::Mobile
    }
}

#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("Viewport signal unavailable: {0}")]
    Unavailable(String),
}

/// Something that can report viewport widths over time
pub trait ViewportSource {
    fn subscribe(&self) -> Result<ViewportSubscription, ViewportError>;
}

/// Live registration with a [`ViewportSource`].
///
/// The unsubscribe hook runs exactly once: on [`release`](Self::release) or on
/// drop, whichever happens first.
pub struct ViewportSubscription {
    widths: UnboundedReceiver<f64>,
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl ViewportSubscription {
    pub fn new(widths: UnboundedReceiver<f64>, unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            widths,
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.unsubscribe.is_some()
    }

    /// Next queued width, if any. Never blocks.
    pub fn try_next(&mut self) -> Option<f64> {
        if !self.is_active() {
            return None;
        }
        self.widths.try_recv().ok()
    }

    pub fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            self.widths.close();
            unsubscribe();
            tracing::debug!("Released viewport subscription");
        }
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ViewportSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportSubscription")
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}
