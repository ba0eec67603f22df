use std::time::Duration;

pub struct BroadcastServiceConfig {
    pub ping_interval: Duration,

    /// The only topic clients can subscribe to
    pub topic: String,

    /// Messages kept for slow sessions before they start lagging
    pub buffer_size: usize,
}
