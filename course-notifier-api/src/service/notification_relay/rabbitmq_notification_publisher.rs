use super::{NotificationPublisher, NotificationRelayConfig};
use rabbitmq_pubsub::{
    PublishError, RabbitmqConnection, RabbitmqPublisher, RabbitmqPublisherConfig,
};

pub struct RabbitmqNotificationPublisher {
    publisher: RabbitmqPublisher,
}

impl RabbitmqNotificationPublisher {
    pub async fn new(
        config: &NotificationRelayConfig,
        rabbitmq_connection: RabbitmqConnection,
    ) -> anyhow::Result<Self> {
        let config = RabbitmqPublisherConfig {
            exchange: config.exchange.clone(),
            queue_capacity: config.queue_capacity,
            content_type: Some("application/json".to_string()),
        };
        let publisher = RabbitmqPublisher::new(rabbitmq_connection, config).await?;

        Ok(Self { publisher })
    }

    pub async fn close(self) {
        let dropped = self.publisher.dropped_messages();
        if dropped > 0 {
            tracing::warn!(dropped, "notifications lost by publisher since start");
        }

        self.publisher.close().await;
    }
}

impl NotificationPublisher for RabbitmqNotificationPublisher {
    fn publish(&self, payload: Vec<u8>) -> Result<(), PublishError> {
        self.publisher.publish(payload)
    }
}
