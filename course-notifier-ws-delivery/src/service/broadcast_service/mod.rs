mod broadcast_service;
mod broadcast_service_impl;
mod dto;
mod error;
mod websocket_connection;

pub use broadcast_service::*;
pub use broadcast_service_impl::*;
pub use dto::BroadcastServiceConfig;
