use axum::{async_trait, extract::ws::WebSocket};
use std::net::SocketAddr;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BroadcastService: Send + Sync {
    ///
    /// Runs the session until the client disconnects,
    /// stops responding or sessions get closed
    ///
    async fn handle_client(&self, user_id: Uuid, address: SocketAddr, websocket: WebSocket);

    ///
    /// Queues payload for every open session. Never blocks.
    ///
    fn broadcast(&self, payload: Vec<u8>);

    fn close_sessions(&self);
}
