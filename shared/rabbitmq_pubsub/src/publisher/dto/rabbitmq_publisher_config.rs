#[derive(Debug, Clone)]
pub struct RabbitmqPublisherConfig {
    /// Name of the fanout exchange messages are published to
    pub exchange: String,

    /// Messages waiting for publication above this count are rejected
    pub queue_capacity: usize,

    /// Sent as `content_type` property of every message
    pub content_type: Option<String>,
}
