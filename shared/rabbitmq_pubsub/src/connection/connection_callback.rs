use amqprs::{connection::Connection, Close};
use async_trait::async_trait;
use tokio::sync::watch;

///
/// Forwards blocked/unblocked notifications from the server
/// to publishers through a watch channel.
///
#[derive(Clone)]
pub struct ConnectionCallback {
    blocked_tx: watch::Sender<bool>,
}

impl ConnectionCallback {
    pub fn new(blocked_tx: watch::Sender<bool>) -> Self {
        Self { blocked_tx }
    }
}

#[async_trait]
impl amqprs::callbacks::ConnectionCallback for ConnectionCallback {
    async fn close(
        &mut self,
        _connection: &Connection,
        close: Close,
    ) -> Result<(), amqprs::error::Error> {
        tracing::warn!(
            code = close.reply_code(),
            text = close.reply_text(),
            "server closed connection",
        );

        Ok(())
    }

    async fn blocked(&mut self, _connection: &Connection, reason: String) {
        tracing::warn!(reason, "connection blocked");
        self.blocked_tx.send_replace(true);
    }

    async fn unblocked(&mut self, _connection: &Connection) {
        tracing::info!("connection unblocked");
        self.blocked_tx.send_replace(false);
    }
}
