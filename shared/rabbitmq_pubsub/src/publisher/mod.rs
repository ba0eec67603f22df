//!
//! Publisher sending messages to a fanout exchange.
//!

mod channel_callback;
mod dto;
mod error;
mod rabbitmq_publisher;
mod state_machine;

pub use dto::RabbitmqPublisherConfig;
pub use error::PublishError;
pub use rabbitmq_publisher::RabbitmqPublisher;
