use rabbitmq_pubsub::PublishError;

///
/// Sink for serialized notifications.
///
/// Must not wait for the broker, it is called
/// on the request task right after commit.
///
#[cfg_attr(test, mockall::automock)]
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, payload: Vec<u8>) -> Result<(), PublishError>;
}
