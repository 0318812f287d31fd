//! Browser navigation for CTA buttons

use plancard_core::Navigate;

/// Navigates the current window
///
/// `#anchor` targets only change the location hash; anything else replaces
/// the location. Outside a browser the request is logged and dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigate for BrowserNavigator {
    #[cfg(target_family = "wasm")]
    fn navigate(&self, target: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(target_href = target, "No window available for navigation");
            return;
        };

        let location = window.location();
        let result = match target.strip_prefix('#') {
            Some(anchor) => location.set_hash(anchor),
            None => location.set_href(target),
        };

        if let Err(err) = result {
            tracing::warn!(target_href = target, error = ?err, "Navigation failed");
        }
    }

    #[cfg(not(target_family = "wasm"))]
    fn navigate(&self, target: &str) {
        tracing::debug!(target_href = target, "Navigation outside a browser ignored");
    }
}
