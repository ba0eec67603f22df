pub mod authors_service;
pub mod courses_service;
pub mod notification_relay;
pub mod roles_service;
pub mod users_service;
