use super::NotificationsSubscriberServiceConfig;
use crate::service::broadcast_service::BroadcastService;
use axum::async_trait;
use rabbitmq_pubsub::{
    RabbitmqConnection, RabbitmqSubscriber, RabbitmqSubscriberConfig,
    RabbitmqSubscriberDeliveryCallback,
};
use std::sync::Arc;
use uuid::Uuid;

///
/// Standing subscription to the notifications channel.
/// Every received message is forwarded to the broadcast topic as is.
///
pub struct NotificationsSubscriberService {
    rabbitmq_subscriber: RabbitmqSubscriber,
}

impl NotificationsSubscriberService {
    pub async fn new(
        config: NotificationsSubscriberServiceConfig,
        rabbitmq_connection: RabbitmqConnection,
        broadcast_service: Arc<dyn BroadcastService>,
    ) -> anyhow::Result<Self> {
        let config = RabbitmqSubscriberConfig {
            exchange: config.exchange,
            queue: format!("{}_{}", config.queue, Uuid::new_v4()),
        };
        let callback = ForwardCallback { broadcast_service };

        let rabbitmq_subscriber =
            RabbitmqSubscriber::new(rabbitmq_connection, config, callback).await?;

        Ok(Self {
            rabbitmq_subscriber,
        })
    }

    pub async fn close(self) {
        self.rabbitmq_subscriber.close().await;
    }
}

struct ForwardCallback {
    broadcast_service: Arc<dyn BroadcastService>,
}

#[async_trait]
impl RabbitmqSubscriberDeliveryCallback for ForwardCallback {
    async fn execute(&self, content: Vec<u8>) {
        tracing::debug!(len = content.len(), "forwarding notification");
        self.broadcast_service.broadcast(content);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::broadcast_service::MockBroadcastService;

    #[tokio::test]
    async fn execute_payload_forwarded_unchanged() {
        let payload = br#"{"entityType":"USER","operation":"DELETED","entityId":"u1","entityName":null,"initiatedBy":"admin","timestamp":42}"#.to_vec();

        let mut broadcast_service = MockBroadcastService::new();
        let expected = payload.clone();
        broadcast_service
            .expect_broadcast()
            .withf(move |content| *content == expected)
            .times(1)
            .return_const(());
        let callback = ForwardCallback {
            broadcast_service: Arc::new(broadcast_service),
        };

        callback.execute(payload).await;
    }

    #[tokio::test]
    async fn execute_invalid_json_forwarded() {
        let mut broadcast_service = MockBroadcastService::new();
        broadcast_service
            .expect_broadcast()
            .withf(|content| content.as_slice() == b"not json")
            .times(1)
            .return_const(());
        let callback = ForwardCallback {
            broadcast_service: Arc::new(broadcast_service),
        };

        callback.execute(b"not json".to_vec()).await;
    }
}
