mod dto;
mod notification_publisher;
mod notification_relay;
mod rabbitmq_notification_publisher;

pub use dto::NotificationRelayConfig;
pub use notification_publisher::*;
pub use notification_relay::*;
pub use rabbitmq_notification_publisher::*;
