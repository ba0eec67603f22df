use uuid::Uuid;

#[derive(Debug)]
pub struct BroadcastMessage {
    /// Identifies the message in logs only, never sent to clients
    pub message_id: Uuid,
    pub payload: Vec<u8>,
}
