mod broadcast_message;
mod broadcast_service_config;
mod client_frame;

pub use broadcast_message::*;
pub use broadcast_service_config::*;
pub use client_frame::*;
