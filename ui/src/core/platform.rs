//! Thin platform glue: spawning detached futures and blocking alerts.

use std::future::Future;

/// Run a future to completion in the background.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// Run a future to completion in the background.
///
/// Must be called from inside a Dioxus runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}

/// Blocking notice for the user.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                tracing::error!("[platform] alert failed: {message}");
            }
        }
        None => tracing::error!("[platform] no window for alert: {message}"),
    }
}

/// Blocking notice for the user. Native shells have no modal, so it is logged.
#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    tracing::error!("[platform] {message}");
}
