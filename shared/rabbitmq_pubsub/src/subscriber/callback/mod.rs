mod rabbitmq_subscriber_delivery_callback;

pub use rabbitmq_subscriber_delivery_callback::RabbitmqSubscriberDeliveryCallback;
