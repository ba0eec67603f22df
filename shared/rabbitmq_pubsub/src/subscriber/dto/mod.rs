mod rabbitmq_subscriber_config;

pub use rabbitmq_subscriber_config::RabbitmqSubscriberConfig;
