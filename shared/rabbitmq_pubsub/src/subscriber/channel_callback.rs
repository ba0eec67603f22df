use amqprs::{
    callbacks::ChannelCallback, channel::Channel, Ack, BasicProperties, Cancel, CloseChannel, Nack,
    Return,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Notify;

///
/// Notifies subscriber when the server cancels its consumer,
/// e.g. after the queue got deleted.
///
pub struct SubscriberChannelCallback {
    cancelled: Arc<Notify>,
}

impl SubscriberChannelCallback {
    pub fn new(cancelled: Arc<Notify>) -> Self {
        Self { cancelled }
    }
}

#[async_trait]
impl ChannelCallback for SubscriberChannelCallback {
    async fn close(
        &mut self,
        _channel: &Channel,
        close: CloseChannel,
    ) -> Result<(), amqprs::error::Error> {
        tracing::warn!(
            code = close.reply_code(),
            text = close.reply_text(),
            "server closed subscriber channel",
        );

        Ok(())
    }

    async fn cancel(
        &mut self,
        _channel: &Channel,
        _cancel: Cancel,
    ) -> Result<(), amqprs::error::Error> {
        tracing::warn!("server cancelled consumer");
        self.cancelled.notify_one();

        Ok(())
    }

    // channel is never used for publishing

    async fn flow(
        &mut self,
        _channel: &Channel,
        active: bool,
    ) -> Result<bool, amqprs::error::Error> {
        Ok(active)
    }

    async fn publish_ack(&mut self, _channel: &Channel, _ack: Ack) {}

    async fn publish_nack(&mut self, _channel: &Channel, _nack: Nack) {}

    async fn publish_return(
        &mut self,
        _channel: &Channel,
        _ret: Return,
        _basic_properties: BasicProperties,
        _content: Vec<u8>,
    ) {
    }
}
