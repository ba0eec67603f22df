mod notification_relay_config;

pub use notification_relay_config::*;
