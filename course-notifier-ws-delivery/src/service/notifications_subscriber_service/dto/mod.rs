mod notifications_subscriber_service_config;

pub use notifications_subscriber_service_config::*;
