//! Outbound stock alerts.

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
#[error("Failed to deliver alert: {0}")]
pub struct NotifyError(pub String);

/// Delivers an already-formatted alert message. Delivery, confirmation and retries
/// belong to the implementation; callers only await completion.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send_alert(&self, message: &str) -> Result<(), NotifyError>;
}

/// Emits alerts as `warn` events on the `stock_alert` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl NotificationSender for LogNotifier {
    async fn send_alert(&self, message: &str) -> Result<(), NotifyError> {
        warn!(target: "stock_alert", %message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_notifier_always_completes() {
        LogNotifier
            .send_alert("Low stock alert: Product LAP-001 has only 3 units left")
            .await
            .unwrap();
    }
}
