//!
//! Subscriber with an exclusive queue bound to a fanout exchange.
//!

mod async_consumer;
mod callback;
mod channel_callback;
mod dto;
mod rabbitmq_subscriber;
mod state_machine;

pub use callback::RabbitmqSubscriberDeliveryCallback;
pub use dto::RabbitmqSubscriberConfig;
pub use rabbitmq_subscriber::RabbitmqSubscriber;
