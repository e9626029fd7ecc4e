use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

use super::{ViewportError, ViewportSource, ViewportSubscription};

/// Per-subscription listener id, so concurrently mounted layouts keep separate handles
static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Installs a `resize` listener under `window.__vconnectViewport[id]` and
/// reports `window.innerWidth` once right away and again on every resize.
fn install_listener_script(id: u64) -> String {
    indoc::formatdoc! {r#"
            window.__vconnectViewport = window.__vconnectViewport || {{}};
            const report = () => dioxus.send(window.innerWidth);
            window.__vconnectViewport[{id}] = report;
            window.addEventListener("resize", report);
            report();
        "#}
}

/// Removes the listener installed by [`install_listener_script`].
fn remove_listener_script(id: u64) -> String {
    indoc::formatdoc! {r#"
            const handlers = window.__vconnectViewport || {{}};
            if (handlers[{id}]) {{
                window.removeEventListener("resize", handlers[{id}]);
                delete handlers[{id}];
            }}
        "#}
}

/// Unsubscribe hook: stop forwarding first, then detach the JS listener.
fn release_listener(
    id: u64,
    cancel_forwarding: impl FnOnce() + 'static,
    run_script: impl FnOnce(String) + 'static,
) -> impl FnOnce() + 'static {
    move || {
        cancel_forwarding();
        run_script(remove_listener_script(id));
        tracing::debug!(id, "Unsubscribed from browser viewport resize events");
    }
}

/// Viewport source backed by the webview's `resize` event.
///
/// Must be subscribed from within a component scope. Every forwarded width
/// bumps `revision` so the owning component re-renders and drains the queue.
///
/// The first width arrives asynchronously, after the eval has run, so a
/// freshly mounted controller has no sample yet.
#[derive(Debug, Clone, Copy)]
pub struct BrowserViewport {
    revision: Signal<u64>,
}

impl BrowserViewport {
    pub fn new(revision: Signal<u64>) -> Self {
        Self { revision }
    }
}

impl ViewportSource for BrowserViewport {
    fn subscribe(&self) -> Result<ViewportSubscription, ViewportError> {
        if self.revision.try_peek().is_err() {
            return Err(ViewportError::Unavailable(
                "owning scope has been dropped".to_string(),
            ));
        }

        let id = NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();
        let mut revision = self.revision;

        let task = spawn(async move {
            let mut eval = document::eval(&install_listener_script(id));
            while let Ok(width) = eval.recv::<f64>().await {
                // Receiver closed once the subscription is released
                if tx.send(width).is_err() {
                    break;
                }
                *revision.write() += 1;
            }
            tracing::debug!(id, "Browser viewport listener stopped");
        });

        tracing::debug!(id, "Subscribed to browser viewport resize events");
        Ok(ViewportSubscription::new(
            rx,
            release_listener(
                id,
                move || task.cancel(),
                |script| {
                    let _ = document::eval(&script);
                },
            ),
        ))
    }
}
