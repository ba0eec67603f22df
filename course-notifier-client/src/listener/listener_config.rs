use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// host:port of the ws-delivery service
    pub api_address: String,
    pub access_token: String,
    pub topic: String,

    /// Fixed delay between connection attempts
    pub reconnect_delay: Duration,
}
