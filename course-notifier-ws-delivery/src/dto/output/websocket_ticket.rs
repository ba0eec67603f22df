use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WebSocketTicket {
    pub ticket: String,
}
