use serde::Deserialize;

/// Query of the WebSocket upgrade request
#[derive(Debug, Deserialize)]
pub struct WebSocketTicket {
    pub ticket: String,
}
