use amqprs::{
    callbacks::ChannelCallback, channel::Channel, Ack, BasicProperties, Cancel, CloseChannel, Nack,
    Return,
};
use async_trait::async_trait;
use tokio::sync::watch;

///
/// Tracks flow control of the publishing channel.
/// Publisher confirms are not enabled so acks never arrive.
///
#[derive(Clone)]
pub struct PublisherChannelCallback {
    flow_tx: watch::Sender<bool>,
}

impl PublisherChannelCallback {
    pub fn new(flow_tx: watch::Sender<bool>) -> Self {
        Self { flow_tx }
    }

    /// A newly opened channel starts with flow active
    pub fn reset_flow(&self) {
        self.flow_tx.send_replace(true);
    }
}

#[async_trait]
impl ChannelCallback for PublisherChannelCallback {
    async fn close(
        &mut self,
        _channel: &Channel,
        close: CloseChannel,
    ) -> Result<(), amqprs::error::Error> {
        tracing::warn!(
            code = close.reply_code(),
            text = close.reply_text(),
            "server closed publisher channel",
        );

        Ok(())
    }

    async fn cancel(
        &mut self,
        _channel: &Channel,
        _cancel: Cancel,
    ) -> Result<(), amqprs::error::Error> {
        Ok(())
    }

    async fn flow(
        &mut self,
        _channel: &Channel,
        active: bool,
    ) -> Result<bool, amqprs::error::Error> {
        tracing::info!(active, "publisher channel flow changed");
        self.flow_tx.send_replace(active);

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
