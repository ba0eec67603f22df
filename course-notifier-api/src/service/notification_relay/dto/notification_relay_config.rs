pub struct NotificationRelayConfig {
    /// Name of the channel (fanout exchange) notifications are published to
    pub exchange: String,

    /// Number of notifications waiting for publication before new ones are dropped
    pub queue_capacity: usize,
}
