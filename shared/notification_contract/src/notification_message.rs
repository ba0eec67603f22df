use serde::{Deserialize, Serialize};

///
/// Wire form of a committed entity change.
///
/// Enum fields are kept as plain strings so that receivers
/// tolerate values they don't know yet.
/// Field order is part of the contract: serialized JSON keys
/// follow declaration order.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMessage {
    pub entity_type: String,
    pub operation: String,
    pub entity_id: Option<String>,
    pub entity_name: Option<String>,
    pub initiated_by: Option<String>,

    /// Milliseconds since unix epoch
    pub timestamp: i64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serialize_exact_json() {
        let message = NotificationMessage {
            entity_type: "COURSE".to_string(),
            operation: "CREATED".to_string(),
            entity_id: Some("c1".to_string()),
            entity_name: Some("Intro".to_string()),
            initiated_by: Some("alice".to_string()),
            timestamp: 1000,
        };

        let json = serde_json::to_string(&message).unwrap();

        assert_eq!(
            json,
            r#"{"entityType":"COURSE","operation":"CREATED","entityId":"c1","entityName":"Intro","initiatedBy":"alice","timestamp":1000}"#
        );
    }

    #[test]
    fn serialize_missing_optionals_as_null() {
        let message = NotificationMessage {
            entity_type: "AUTHOR".to_string(),
            operation: "DELETED".to_string(),
            entity_id: None,
            entity_name: None,
            initiated_by: None,
            timestamp: 5,
        };

        let json = serde_json::to_string(&message).unwrap();

        assert_eq!(
            json,
            r#"{"entityType":"AUTHOR","operation":"DELETED","entityId":null,"entityName":null,"initiatedBy":null,"timestamp":5}"#
        );
    }

    #[test]
    fn deserialize_unknown_entity_type() {
        let json = r#"{"entityType":"ROLE","operation":"CREATED","entityId":null,"entityName":null,"initiatedBy":null,"timestamp":1}"#;

        let message = serde_json::from_str::<NotificationMessage>(json).unwrap();

        assert_eq!(message.entity_type, "ROLE");
    }
}
