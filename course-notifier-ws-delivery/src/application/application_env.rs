use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use jwt_auth::util::{parse_jwt_algorithms, parse_jwt_key};
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,

    pub rabbitmq_connection_string: String,
    pub rabbitmq_retry_interval: Duration,
    pub rabbitmq_notifications_exchange_name: String,

    /// Prefix of the exclusive queue, every instance appends its own suffix
    pub rabbitmq_notifications_queue_name: String,

    pub websocket_ticket_lifespan: Duration,
    pub websocket_ping_interval: Duration,
    pub websocket_broadcast_topic: String,
    pub websocket_broadcast_buffer_size: usize,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_LOG_FILENAME")?;
        let bind_address = Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_BIND_ADDRESS")?.parse()?;
        let db_connection_string =
            Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_DB_NAME")?;
        let jwt_algorithms =
            parse_jwt_algorithms(&Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "COURSE_NOTIFIER_WS_DELIVERY_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(
            jwt_algorithm,
            &Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_JWT_KEY")?,
        )?;
        let rabbitmq_connection_string =
            Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_RABBITMQ_CONNECTION_STRING")?;
        let rabbitmq_retry_interval =
            Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_RABBITMQ_RETRY_INTERVAL")?.parse()?;
        let rabbitmq_retry_interval = Duration::from_secs(rabbitmq_retry_interval);
        let rabbitmq_notifications_exchange_name =
            Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_RABBITMQ_NOTIFICATIONS_EXCHANGE_NAME")?;
        let rabbitmq_notifications_queue_name =
            Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_RABBITMQ_NOTIFICATIONS_QUEUE_NAME")?;
        let websocket_ticket_lifespan =
            Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_WEBSOCKET_TICKET_LIFESPAN")?.parse()?;
        let websocket_ticket_lifespan = Duration::from_secs(websocket_ticket_lifespan);
        let websocket_ping_interval =
            Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_WEBSOCKET_PING_INTERVAL")?.parse()?;
        let websocket_ping_interval = Duration::from_secs(websocket_ping_interval);
        let websocket_broadcast_topic =
            Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_WEBSOCKET_BROADCAST_TOPIC")?;
        let websocket_broadcast_buffer_size =
            Self::env_var("COURSE_NOTIFIER_WS_DELIVERY_WEBSOCKET_BROADCAST_BUFFER_SIZE")?
                .parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            jwt_algorithms,
            jwt_key,
            rabbitmq_connection_string,
            rabbitmq_retry_interval,
            rabbitmq_notifications_exchange_name,
            rabbitmq_notifications_queue_name,
            websocket_ticket_lifespan,
            websocket_ping_interval,
            websocket_broadcast_topic,
            websocket_broadcast_buffer_size,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
