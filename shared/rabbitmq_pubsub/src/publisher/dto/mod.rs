mod rabbitmq_publisher_config;

pub use rabbitmq_publisher_config::RabbitmqPublisherConfig;
