mod websocket_ticket;

pub use websocket_ticket::*;
