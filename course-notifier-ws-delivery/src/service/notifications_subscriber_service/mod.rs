mod dto;
mod notifications_subscriber_service;

pub use dto::NotificationsSubscriberServiceConfig;
pub use notifications_subscriber_service::*;
