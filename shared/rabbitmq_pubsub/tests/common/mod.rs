use amqprs::connection::{Connection, OpenConnectionArguments};
use async_trait::async_trait;
use rabbitmq_pubsub::{
    RabbitmqConnection, RabbitmqConnectionConfig, RabbitmqSubscriberDeliveryCallback,
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::level_filters::LevelFilter;

pub fn init_test_environment() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_target(false)
        .with_test_writer()
        .init();
}

pub fn connection_uri() -> String {
    std::env::var("TEST_RABBITMQ_CONNECTION_URI").unwrap()
}

pub async fn create_connection() -> Connection {
    let args = OpenConnectionArguments::try_from(connection_uri().as_str()).unwrap();

    Connection::open(&args).await.unwrap()
}

pub async fn create_rabbitmq_connection() -> RabbitmqConnection {
    let retry_interval = std::env::var("TEST_RETRY_INTERVAL")
        .unwrap()
        .parse()
        .unwrap();

    let config = RabbitmqConnectionConfig {
        retry_interval: Duration::from_secs(retry_interval),
    };
    let args = OpenConnectionArguments::try_from(connection_uri().as_str()).unwrap();

    RabbitmqConnection::new(config, args).await.unwrap()
}

///
/// Forwards every received message to the test through a channel
///
pub struct ForwardingCallback {
    pub tx: mpsc::UnboundedSender<Vec<u8>>,
}

#[async_trait]
impl RabbitmqSubscriberDeliveryCallback for ForwardingCallback {
    async fn execute(&self, content: Vec<u8>) {
        let _ = self.tx.send(content);
    }
}
