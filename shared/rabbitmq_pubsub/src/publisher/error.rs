#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("dispatch queue is full")]
    QueueFull,

    #[error("publisher is closed")]
    Closed,
}
