use notification_contract::{EntityType, NotificationMessage, OperationType};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// `{timestamp}-{random base36 suffix}`, unique enough to tell duplicates apart
    pub id: String,
    pub message: String,
    pub entity_type: String,
    pub operation: String,
    pub entity_id: Option<String>,

    /// Milliseconds since unix epoch
    pub timestamp: i64,
    pub read: bool,
}

impl Notification {
    pub fn new(message: NotificationMessage) -> Self {
        Self {
            id: format!("{}-{}", message.timestamp, random_base36()),
            message: describe(&message),
            entity_type: message.entity_type,
            operation: message.operation,
            entity_id: message.entity_id,
            timestamp: message.timestamp,
            read: false,
        }
    }

    /// Toast title, e.g. "Created"
    pub fn title(&self) -> String {
        match OperationType::from_str(&self.operation) {
            Ok(operation) => capitalize(operation.label()),
            Err(_) => self.operation.clone(),
        }
    }
}

///
/// `Course "Intro" was created by alice.`
///
/// Name and initiator are left out when missing,
/// unknown entity types and operations are shown as received.
///
fn describe(message: &NotificationMessage) -> String {
    let entity = EntityType::from_str(&message.entity_type)
        .map(|entity_type| entity_type.label())
        .unwrap_or(message.entity_type.as_str());
    let operation = OperationType::from_str(&message.operation)
        .map(|operation| operation.label())
        .unwrap_or(message.operation.as_str());
    let name = message
        .entity_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .map(|name| format!(" \"{name}\""))
        .unwrap_or_default();
    let initiated_by = message
        .initiated_by
        .as_deref()
        .filter(|initiated_by| !initiated_by.is_empty())
        .map(|initiated_by| format!(" by {initiated_by}"))
        .unwrap_or_default();

    format!("{entity}{name} was {operation}{initiated_by}.")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn random_base36() -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut value = Uuid::new_v4().as_u128() as u64;
    let mut suffix = Vec::with_capacity(13);
    loop {
        suffix.push(DIGITS[(value % 36) as usize]);
        value /= 36;
        if value == 0 {
            break;
        }
    }
    suffix.reverse();

    String::from_utf8_lossy(&suffix).into_owned()
}
