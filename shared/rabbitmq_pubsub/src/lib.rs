//!
//! Fire-and-forget publish/subscribe over RabbitMQ fanout exchanges.
//!
//! - [RabbitmqConnection] keeps a single AMQP connection alive
//! - [RabbitmqPublisher] publishes through a bounded dispatch queue,
//!   never blocking the caller
//! - [RabbitmqSubscriber] keeps a standing subscription with its own
//!   exclusive queue bound to the exchange
//!
//! All of them recover after connection failures on their own.
//! Messages are not confirmed, not acknowledged and never resent.
//!

mod connection;
mod exchange;
mod publisher;
mod retry;
mod subscriber;

pub use connection::{RabbitmqConnection, RabbitmqConnectionConfig};
pub use publisher::{PublishError, RabbitmqPublisher, RabbitmqPublisherConfig};
pub use subscriber::{
    RabbitmqSubscriber, RabbitmqSubscriberConfig, RabbitmqSubscriberDeliveryCallback,
};
