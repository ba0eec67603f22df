use super::RabbitmqSubscriberDeliveryCallback;
use amqprs::{channel::Channel, BasicProperties, Deliver};
use async_trait::async_trait;
use std::sync::Arc;

pub struct AsyncConsumer<Callback> {
    callback: Arc<Callback>,
}

impl<Callback> AsyncConsumer<Callback> {
    pub fn new(callback: Arc<Callback>) -> Self {
        Self { callback }
    }
}

impl<Callback> Clone for AsyncConsumer<Callback> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

#[async_trait]
impl<Callback> amqprs::consumer::AsyncConsumer for AsyncConsumer<Callback>
where
    Callback: RabbitmqSubscriberDeliveryCallback + Send + Sync + 'static,
{
    #[tracing::instrument(
        name = "RabbitMQ Subscriber",
        target = "rabbitmq_pubsub::subscriber",
        skip_all
    )]
    async fn consume(
        &mut self,
        _channel: &Channel,
        deliver: Deliver,
        _basic_properties: BasicProperties,
        content: Vec<u8>,
    ) {
        tracing::debug!(
            delivery_tag = deliver.delivery_tag(),
            len = content.len(),
            "received message"
        );
        self.callback.execute(content).await;
    }
}
