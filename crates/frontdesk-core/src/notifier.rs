/// Shown after the server confirms a transaction.
pub const SUCCESS_NOTICE: &str = "Transaction created successfully!";
/// Shown when the mutation fails for any reason.
pub const FAILURE_NOTICE: &str = "something went wrong!";

/// Surfaces transient user notifications (toasts, status lines).
pub trait Notifier {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// Routes notifications to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(notice = message, "transaction notice");
    }

    fn failure(&self, message: &str) {
        tracing::warn!(notice = message, "transaction notice");
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn failure(&self, message: &str) {
        (**self).failure(message)
    }
}
