use notification_contract::{EntityType, NotificationMessage, OperationType};
use time::OffsetDateTime;

///
/// Committed change of a single entity
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationEvent {
    pub entity_type: EntityType,
    pub operation: OperationType,
    pub entity_id: Option<String>,
    pub entity_name: Option<String>,
    pub initiated_by: Option<String>,

    /// Milliseconds since unix epoch
    pub timestamp: i64,
}

impl OperationEvent {
    /// Creates event timestamped with current time
    pub fn new(
        entity_type: EntityType,
        operation: OperationType,
        entity_id: impl Into<String>,
        entity_name: impl Into<String>,
        initiated_by: impl Into<String>,
    ) -> Self {
        let timestamp = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

        Self {
            entity_type,
            operation,
            entity_id: Some(entity_id.into()),
            entity_name: Some(entity_name.into()),
            initiated_by: Some(initiated_by.into()),
            timestamp: timestamp as i64,
        }
    }

    pub fn to_message(&self) -> NotificationMessage {
        NotificationMessage {
            entity_type: self.entity_type.as_ref().to_string(),
            operation: self.operation.as_ref().to_string(),
            entity_id: self.entity_id.clone(),
            entity_name: self.entity_name.clone(),
            initiated_by: self.initiated_by.clone(),
            timestamp: self.timestamp,
        }
    }
}
