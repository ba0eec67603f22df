pub mod broadcast_service;
pub mod notifications_subscriber_service;
pub mod tickets_service;
