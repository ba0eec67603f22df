use super::{
    dto::{BroadcastMessage, BroadcastServiceConfig},
    websocket_connection::WebSocketConnection,
    BroadcastService,
};
use axum::{async_trait, extract::ws::WebSocket};
use futures::StreamExt;
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::{broadcast, watch};
use uuid::Uuid;

pub struct BroadcastServiceImpl {
    config: Arc<BroadcastServiceConfig>,

    messages_tx: broadcast::Sender<Arc<BroadcastMessage>>,
    close_tx: watch::Sender<bool>,
}

impl BroadcastServiceImpl {
    pub fn new(config: BroadcastServiceConfig) -> Self {
        let (messages_tx, _) = broadcast::channel(config.buffer_size);
        let (close_tx, _) = watch::channel(false);

        Self {
            config: Arc::new(config),
            messages_tx,
            close_tx,
        }
    }
}

#[async_trait]
impl BroadcastService for BroadcastServiceImpl {
    async fn handle_client(&self, user_id: Uuid, address: SocketAddr, websocket: WebSocket) {
        let (ws_tx, ws_rx) = websocket.split();

        let connection = WebSocketConnection::new(
            self.config.clone(),
            user_id,
            address,
            self.messages_tx.subscribe(),
            self.close_tx.subscribe(),
            ws_tx,
            ws_rx,
        );

        tracing::info!(%user_id, %address, "session opened");
        connection.run().await;
    }

    fn broadcast(&self, payload: Vec<u8>) {
        let message = Arc::new(BroadcastMessage {
            message_id: Uuid::new_v4(),
            payload,
        });
        let message_id = message.message_id.to_string();

        match self.messages_tx.send(message) {
            Ok(sessions) => tracing::info!(message_id, sessions, "queued message to be sent"),
            Err(_) => tracing::debug!(message_id, "no open sessions, message skipped"),
        }
    }

    fn close_sessions(&self) {
        let sessions = self.messages_tx.receiver_count();
        tracing::info!(sessions, "closing sessions");

        self.close_tx.send_replace(true);
    }
}
