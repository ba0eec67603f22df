//!
//! Message contract shared by every process taking part
//! in entity change notifications.
//!

mod entity_type;
mod notification_message;
mod operation_type;

pub use entity_type::EntityType;
pub use notification_message::NotificationMessage;
pub use operation_type::OperationType;
