use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("ticket request rejected with status {0}")]
    TicketRejected(StatusCode),

    #[error("invalid ticket response: {0}")]
    TicketResponse(#[from] serde_json::Error),

    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("notifications receiver closed")]
    ReceiverClosed,
}
