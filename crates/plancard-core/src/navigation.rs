//! Navigation seam for call-to-action controls
//!
//! The section never interprets a CTA target. It hands the configured string
//! to whatever [`Navigate`] implementation the host page provides.

use parking_lot::Mutex;

/// Host-provided navigation collaborator
pub trait Navigate: Send + Sync {
    /// Navigate to `target` (path, anchor or external URL)
    fn navigate(&self, target: &str);
}

/// Navigator for hosts without a browser: logs and drops the request
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigate for LogNavigator {
    fn navigate(&self, target: &str) {
        tracing::info!(target_href = target, "navigation requested");
    }
}

/// Navigator that remembers every target it was handed
///
/// Useful for previews and tests that assert on CTA wiring.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets in the order they were requested
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.lock().last().cloned()
    }
}

impl Navigate for RecordingNavigator {
    fn navigate(&self, target: &str) {
        self.visited.lock().push(target.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_recording_navigator_keeps_targets_verbatim() {
        let navigator = Arc::new(RecordingNavigator::new());
        let as_trait: Arc<dyn Navigate> = navigator.clone();

        as_trait.navigate("/signup?plan=starter");
        as_trait.navigate("  not a url  ");

        assert_eq!(
            navigator.visited(),
            vec!["/signup?plan=starter".to_string(), "  not a url  ".to_string()]
        );
        assert_eq!(navigator.last().as_deref(), Some("  not a url  "));
    }
}
