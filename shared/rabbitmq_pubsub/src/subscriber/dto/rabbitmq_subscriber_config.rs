#[derive(Debug, Clone)]
pub struct RabbitmqSubscriberConfig {
    /// Name of the fanout exchange to subscribe to
    pub exchange: String,

    ///
    /// Name of the queue bound to the exchange.
    /// Queue is exclusive to the subscriber and deleted with its connection,
    /// so every process needs its own name.
    ///
    pub queue: String,
}
