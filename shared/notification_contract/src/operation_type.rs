use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

///
/// Kind of change applied to an entity.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Created,
    Updated,
    Deleted,
}

impl OperationType {
    /// Past tense verb used in human readable messages
    pub fn label(&self) -> &'static str {
        match self {
            OperationType::Created => "created",
            OperationType::Updated => "updated",
            OperationType::Deleted => "deleted",
        }
    }
}
