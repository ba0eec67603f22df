use super::{
    dto::{BroadcastMessage, BroadcastServiceConfig, ClientFrame},
    error::Error,
};
use anyhow::anyhow;
use axum::extract::ws::Message;
use futures::{Sink, SinkExt, Stream, StreamExt};
use std::{fmt::Display, net::SocketAddr, sync::Arc};
use tokio::{
    sync::{broadcast, watch},
    time::{sleep_until, Instant},
};
use uuid::Uuid;

pub struct WebSocketConnection<WebSocketSink, WebSocketStream> {
    config: Arc<BroadcastServiceConfig>,

    user_id: Uuid,
    user_address: SocketAddr,

    messages_rx: broadcast::Receiver<Arc<BroadcastMessage>>,
    close_rx: watch::Receiver<bool>,
    ws_tx: WebSocketSink,
    ws_rx: WebSocketStream,

    subscribed: bool,

    ping_time: Instant,
    ping_message: u32,
    pings_sent: u8,
}

impl<WebSocketSink, WebSocketStream, SinkError, StreamError>
    WebSocketConnection<WebSocketSink, WebSocketStream>
where
    WebSocketSink: Sink<Message, Error = SinkError> + Unpin,
    WebSocketStream: Stream<Item = Result<Message, StreamError>> + Unpin,
    SinkError: Display,
    StreamError: Display,
{
    pub fn new(
        config: Arc<BroadcastServiceConfig>,
        user_id: Uuid,
        user_address: SocketAddr,
        messages_rx: broadcast::Receiver<Arc<BroadcastMessage>>,
        close_rx: watch::Receiver<bool>,
        ws_tx: WebSocketSink,
        ws_rx: WebSocketStream,
    ) -> Self {
        let ping_time = Instant::now() + config.ping_interval;

        Self {
            config,
            user_id,
            user_address,
            messages_rx,
            close_rx,
            ws_tx,
            ws_rx,
            subscribed: false,
            ping_time,
            ping_message: 0,
            pings_sent: 0,
        }
    }

    #[tracing::instrument(
        name = "WebSocket",
        skip_all,
        fields(
            user_id = %self.user_id,
            address = %self.user_address,
        )
    )]
    pub async fn run(mut self) {
        match self.try_run().await {
            Ok(()) => (),
            Err(Error::Close(message)) => {
                tracing::info!("closing connection: {message}");
            }
            Err(Error::Anyhow(err)) => {
                tracing::warn!("{err}");
            }
        }

        tracing::info!("closing websocket");
        match self.ws_tx.close().await {
            Ok(()) => tracing::info!("websocket closed"),
            Err(err) => tracing::warn!(%err, "failed to close websocket"),
        }
    }

    async fn try_run(&mut self) -> Result<(), Error> {
        if *self.close_rx.borrow_and_update() {
            return Err(Error::Close("server shutting down"));
        }

        loop {
            tokio::select! {
                biased;

                // Sender dropped or value changed, both mean shutdown
                _ = self.close_rx.changed() => {
                    return Err(Error::Close("server shutting down"));
                }

                _ = sleep_until(self.ping_time) => {
                    self.process_ping().await?;
                }

                message = self.ws_rx.next() => {
                    self.process_incomming_message(message)?;
                }

                message = self.messages_rx.recv() => {
                    self.process_message(message).await?;
                }
            }
        }
    }

    async fn process_ping(&mut self) -> anyhow::Result<()> {
        // Two pings in a row without a pong
        if self.pings_sent > 1 {
            anyhow::bail!("user unresponsive");
        }

        if self.pings_sent == 0 {
            self.ping_message = self.ping_message.wrapping_add(1);
        }

        let bytes = self.ping_message.to_be_bytes().to_vec();
        self.ws_tx
            .send(Message::Ping(bytes))
            .await
            .map_err(|err| anyhow!("failed to send ping: {err}"))?;
        tracing::trace!(ping_message = self.ping_message, "ping sent");

        self.pings_sent += 1;
        self.ping_time = Instant::now() + self.config.ping_interval;

        Ok(())
    }

    fn process_incomming_message(
        &mut self,
        message: Option<Result<Message, StreamError>>,
    ) -> Result<(), Error> {
        match message {
            Some(Ok(Message::Text(text))) => {
                tracing::debug!("processing client frame");
                self.process_incomming_text_message(&text)?;
            }
            Some(Ok(Message::Binary(_))) => {
                return Err(Error::Anyhow(anyhow!("received binary message")));
            }
            Some(Ok(Message::Ping(_))) => tracing::trace!("processed ping message"),
            Some(Ok(Message::Pong(payload))) => {
                tracing::trace!("processing pong message");
                self.process_incomming_pong_message(payload)?;
                tracing::trace!("processed pong message");
            }
            Some(Ok(Message::Close(_))) => {
                return Err(Error::Close("received close message"));
            }
            Some(Err(err)) => {
                return Err(Error::Anyhow(anyhow!(
                    "failed to read incomming message: {err}"
                )));
            }
            None => return Err(Error::Anyhow(anyhow!("incomming messages stream closed"))),
        }

        Ok(())
    }

    fn process_incomming_text_message(&mut self, text: &str) -> anyhow::Result<()> {
        let frame = serde_json::from_str::<ClientFrame>(text)
            .map_err(|err| anyhow!("failed to decode client frame: {err}"))?;

        match frame {
            ClientFrame::Subscribe { topic } if topic == self.config.topic => {
                self.subscribed = true;
                tracing::info!(topic, "subscribed");
            }
            ClientFrame::Unsubscribe { topic } if topic == self.config.topic => {
                self.subscribed = false;
                tracing::info!(topic, "unsubscribed");
            }
            ClientFrame::Subscribe { topic } | ClientFrame::Unsubscribe { topic } => {
                tracing::warn!(topic, "unknown topic");
            }
        }

        Ok(())
    }

    fn process_incomming_pong_message(&mut self, payload: Vec<u8>) -> anyhow::Result<()> {
        let byte_array = payload.try_into().map_err(|err: Vec<u8>| {
            anyhow!(
                "pong payload length invalid: len {} expected {}",
                err.len(),
                size_of::<u32>()
            )
        })?;
        let pong_message = u32::from_be_bytes(byte_array);

        if self.pings_sent == 0 {
            tracing::trace!("pong was not expected");
            return Ok(());
        }

        // Late pong for the previous heartbeat
        if pong_message != self.ping_message {
            tracing::trace!(
                pong_message,
                ping_message = self.ping_message,
                "pong message does not match expected message"
            );
            return Ok(());
        }

        self.ping_time = Instant::now() + self.config.ping_interval;
        self.pings_sent = 0;

        Ok(())
    }

    async fn process_message(
        &mut self,
        message: Result<Arc<BroadcastMessage>, broadcast::error::RecvError>,
    ) -> Result<(), Error> {
        match message {
            Err(broadcast::error::RecvError::Lagged(count)) => {
                tracing::warn!(skipped = count, "connection lagged");
                Ok(())
            }
            Err(broadcast::error::RecvError::Closed) => {
                Err(Error::Close("connection forcefully closed"))
            }
            Ok(message) => {
                let message_id = message.message_id.to_string();

                if !self.subscribed {
                    tracing::trace!(message_id, "not subscribed, message skipped");
                    return Ok(());
                }

                let frame = match String::from_utf8(message.payload.clone()) {
                    Ok(text) => Message::Text(text),
                    Err(err) => Message::Binary(err.into_bytes()),
                };

                tracing::debug!(message_id, "sending message");
                self.ws_tx
                    .send(frame)
                    .await
                    .map_err(|err| anyhow!("sending message failed: {err}"))?;
                tracing::info!(message_id, "sent message");

                Ok(())
            }
        }
    }
}
