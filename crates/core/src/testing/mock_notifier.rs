//! Mock notifier for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::listing::Listing;
use crate::notifier::{compose_body, NotifyError, Notifier};

/// A recorded notification for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedNotification {
    /// The listings the notification covered.
    pub listings: Vec<Listing>,
    /// The body the real notifier would have sent.
    pub body: String,
}

/// Mock implementation of the Notifier trait.
///
/// Provides controllable behavior for testing:
/// - Record every delivered notification
/// - Simulate delivery failures
///
/// # Example
///
/// ```rust,ignore
/// use housing_watch_core::testing::MockNotifier;
///
/// let notifier = MockNotifier::new();
/// notifier.set_next_error(NotifyError::Delivery("535 auth failed".into())).await;
///
/// assert!(notifier.notify(&listings).await.is_err());
/// assert_eq!(notifier.notification_count().await, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockNotifier {
    /// Successfully delivered notifications.
    notifications: Arc<RwLock<Vec<RecordedNotification>>>,
    /// If set, the next notification will fail with this error.
    next_error: Arc<RwLock<Option<NotifyError>>>,
    /// Number of notify calls, failed ones included.
    attempts: Arc<RwLock<usize>>,
}

impl MockNotifier {
    /// Create a new mock notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all delivered notifications.
    pub async fn recorded_notifications(&self) -> Vec<RecordedNotification> {
        self.notifications.read().await.clone()
    }

    /// Get the number of delivered notifications.
    pub async fn notification_count(&self) -> usize {
        self.notifications.read().await.len()
    }

    /// Get the number of notify calls, including failed ones.
    pub async fn attempt_count(&self) -> usize {
        *self.attempts.read().await
    }

    /// Configure the next notification to fail with the given error.
    pub async fn set_next_error(&self, error: NotifyError) {
        *self.next_error.write().await = Some(error);
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    fn name(&self) -> &str {
        "mock"
    }

    async fn notify(&self, listings: &[Listing]) -> Result<(), NotifyError> {
        if listings.is_empty() {
            return Ok(());
        }

        *self.attempts.write().await += 1;

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        self.notifications.write().await.push(RecordedNotification {
            listings: listings.to_vec(),
            body: compose_body(listings),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_notifier_records() {
        let notifier = MockNotifier::new();
        let listings = vec![Listing::new("Room B", "https://x/b")];

        notifier.notify(&listings).await.unwrap();

        let recorded = notifier.recorded_notifications().await;
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].listings, listings);
        assert!(recorded[0].body.contains("- Room B\n  https://x/b"));
    }

    #[tokio::test]
    async fn test_mock_notifier_failure_is_not_recorded() {
        let notifier = MockNotifier::new();
        notifier
            .set_next_error(NotifyError::Delivery("535 authentication failed".into()))
            .await;

        let result = notifier.notify(&[Listing::new("Room B", "https://x/b")]).await;

        assert!(matches!(result, Err(NotifyError::Delivery(_))));
        assert_eq!(notifier.notification_count().await, 0);
        assert_eq!(notifier.attempt_count().await, 1);
    }

    #[tokio::test]
    async fn test_mock_notifier_empty_is_noop() {
        let notifier = MockNotifier::new();
        notifier.notify(&[]).await.unwrap();
        assert_eq!(notifier.attempt_count().await, 0);
    }
}
