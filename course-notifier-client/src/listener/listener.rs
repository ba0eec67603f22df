use super::{Error, ListenerConfig};
use futures::{SinkExt, StreamExt};
use notification_contract::NotificationMessage;
use reqwest::Client;
use serde_json::Value;
use tokio::{sync::mpsc, time::sleep};
use tokio_tungstenite::{connect_async, tungstenite::Message};

///
/// Keeps a WebSocket session subscribed to the notifications topic.
///
/// Received notifications are handed over through a channel.
/// After a disconnect the listener waits a fixed delay and connects
/// again with a new ticket, notifications sent in the meantime are lost.
///
pub struct Listener {
    config: ListenerConfig,
    client: Client,
    notifications_tx: mpsc::Sender<NotificationMessage>,
}

impl Listener {
    pub fn new(config: ListenerConfig, notifications_tx: mpsc::Sender<NotificationMessage>) -> Self {
        Self {
            config,
            client: Client::new(),
            notifications_tx,
        }
    }

    /// Runs until the notifications receiver is dropped
    #[tracing::instrument(name = "Listener", skip_all, fields(address = self.config.api_address))]
    pub async fn run(self) {
        loop {
            match self.listen().await {
                Ok(()) => tracing::info!("connection closed"),
                Err(Error::ReceiverClosed) => break,
                Err(err) => tracing::warn!(%err, "connection failed"),
            }

            if self.notifications_tx.is_closed() {
                break;
            }

            tracing::info!(
                delay_ms = self.config.reconnect_delay.as_millis() as u64,
                "reconnecting"
            );
            sleep(self.config.reconnect_delay).await;
        }

        tracing::info!("listener stopped");
    }

    async fn listen(&self) -> Result<(), Error> {
        let ticket = self.fetch_ticket().await?;

        let url = format!("ws://{}/ws/v1?ticket={}", self.config.api_address, ticket);
        let (mut ws, _) = connect_async(url).await?;
        tracing::info!("connected");

        let subscribe = serde_json::json!({
            "type": "SUBSCRIBE",
            "topic": self.config.topic,
        });
        ws.send(Message::Text(subscribe.to_string())).await?;
        tracing::info!(topic = self.config.topic, "subscribed");

        while let Some(message) = ws.next().await {
            match message? {
                Message::Text(text) => {
                    let Some(notification) = parse_notification(&text) else {
                        continue;
                    };
                    self.notifications_tx
                        .send(notification)
                        .await
                        .map_err(|_| Error::ReceiverClosed)?;
                }
                Message::Binary(payload) => {
                    tracing::warn!(len = payload.len(), "unexpected binary message dropped");
                }
                Message::Close(_) => break,
                // pongs are answered by tungstenite itself
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => (),
            }
        }

        Ok(())
    }

    async fn fetch_ticket(&self) -> Result<String, Error> {
        let response = self
            .client
            .get(format!("http://{}/api/v1/ticket", self.config.api_address))
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::TicketRejected(status));
        }

        let body = response.bytes().await?;
        let body = serde_json::from_slice::<Value>(&body)?;
        let ticket = body
            .get("ticket")
            .and_then(Value::as_str)
            .ok_or(Error::TicketRejected(status))?;

        Ok(ticket.to_string())
    }
}

///
/// Parses a single notification.
/// Malformed notifications are logged and dropped.
///
pub fn parse_notification(text: &str) -> Option<NotificationMessage> {
    match serde_json::from_str(text) {
        Ok(notification) => Some(notification),
        Err(err) => {
            tracing::error!(%err, "failed to parse notification");
            None
        }
    }
}
