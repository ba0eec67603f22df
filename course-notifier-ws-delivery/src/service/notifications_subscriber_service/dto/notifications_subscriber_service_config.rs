pub struct NotificationsSubscriberServiceConfig {
    pub exchange: String,

    /// Queue name prefix, every instance gets its own queue
    pub queue: String,
}
