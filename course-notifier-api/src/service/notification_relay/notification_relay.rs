use super::NotificationPublisher;
use crate::event::{OperationEvent, OperationEventListener};
use axum::async_trait;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

///
/// Translates committed [OperationEvent]s into JSON
/// notification messages published to the channel.
///
/// Delivery is best-effort. Notifications that cannot be
/// serialized or queued are logged, counted and forgotten.
///
pub struct NotificationRelay {
    publisher: Arc<dyn NotificationPublisher>,
    dropped: AtomicU64,
}

impl NotificationRelay {
    pub fn new(publisher: Arc<dyn NotificationPublisher>) -> Self {
        Self {
            publisher,
            dropped: AtomicU64::new(0),
        }
    }

    /// Number of notifications dropped since start
    pub fn dropped_notifications(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn count_dropped(&self) -> u64 {
        self.dropped.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[async_trait]
impl OperationEventListener for NotificationRelay {
    async fn on_operation_event(&self, event: &OperationEvent) -> anyhow::Result<()> {
        let message = event.to_message();

        let payload = match serde_json::to_vec(&message) {
            Ok(payload) => payload,
            Err(err) => {
                let dropped_total = self.count_dropped();
                tracing::error!(%err, dropped_total, "failed to serialize notification");
                return Ok(());
            }
        };

        match self.publisher.publish(payload) {
            Ok(()) => tracing::debug!(
                entity_type = %message.entity_type,
                operation = %message.operation,
                entity_id = ?message.entity_id,
                "notification queued"
            ),
            Err(err) => {
                let dropped_total = self.count_dropped();
                tracing::error!(%err, dropped_total, "failed to publish notification");
            }
        }

        Ok(())
    }
}
