mod error;
mod listener;
mod listener_config;

pub use error::Error;
pub use listener::*;
pub use listener_config::*;
