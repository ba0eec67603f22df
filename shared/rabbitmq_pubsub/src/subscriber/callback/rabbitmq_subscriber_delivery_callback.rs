use async_trait::async_trait;

///
/// Callback executed for every received message, in order of arrival.
///
/// Messages are auto acknowledged, so there is nothing to report back.
///
#[async_trait]
pub trait RabbitmqSubscriberDeliveryCallback {
    async fn execute(&self, content: Vec<u8>);
}
