//! User-facing notifications (toasts).

/// Receives the outcome of user actions.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes notifications to the tracing log. The default for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(toast = message, "Success notification");
    }

    fn error(&self, message: &str) {
        tracing::warn!(toast = message, "Error notification");
    }
}
