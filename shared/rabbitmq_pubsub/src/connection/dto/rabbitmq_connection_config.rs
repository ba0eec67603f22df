use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RabbitmqConnectionConfig {
    /// Pause between attempts to recreate connection or channels
    pub retry_interval: Duration,
}
