use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use jwt_auth::util::{parse_jwt_algorithms, parse_jwt_key};
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,
    pub max_http_content_len: usize,

    pub db_connection_string: String,
    pub db_name: String,

    /// Multi-document transactions require replica set
    pub db_transactions_enabled: bool,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,

    pub rabbitmq_connection_string: String,
    pub rabbitmq_retry_interval: Duration,
    pub rabbitmq_notifications_exchange_name: String,

    pub notifications_queue_capacity: usize,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("COURSE_NOTIFIER_API_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("COURSE_NOTIFIER_API_LOG_FILENAME")?;
        let bind_address = Self::env_var("COURSE_NOTIFIER_API_BIND_ADDRESS")?.parse()?;
        let max_http_content_len =
            Self::env_var("COURSE_NOTIFIER_API_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let db_connection_string = Self::env_var("COURSE_NOTIFIER_API_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("COURSE_NOTIFIER_API_DB_NAME")?;
        let db_transactions_enabled =
            Self::env_var("COURSE_NOTIFIER_API_DB_TRANSACTIONS_ENABLED")?.parse()?;
        let jwt_algorithms =
            parse_jwt_algorithms(&Self::env_var("COURSE_NOTIFIER_API_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "COURSE_NOTIFIER_API_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(jwt_algorithm, &Self::env_var("COURSE_NOTIFIER_API_JWT_KEY")?)?;
        let rabbitmq_connection_string =
            Self::env_var("COURSE_NOTIFIER_API_RABBITMQ_CONNECTION_STRING")?;
        let rabbitmq_retry_interval =
            Self::env_var("COURSE_NOTIFIER_API_RABBITMQ_RETRY_INTERVAL")?.parse()?;
        let rabbitmq_retry_interval = Duration::from_secs(rabbitmq_retry_interval);
        let rabbitmq_notifications_exchange_name =
            Self::env_var("COURSE_NOTIFIER_API_RABBITMQ_NOTIFICATIONS_EXCHANGE_NAME")?;
        let notifications_queue_capacity =
            Self::env_var("COURSE_NOTIFIER_API_NOTIFICATIONS_QUEUE_CAPACITY")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            max_http_content_len,
            db_connection_string,
            db_name,
            db_transactions_enabled,
            jwt_algorithms,
            jwt_key,
            rabbitmq_connection_string,
            rabbitmq_retry_interval,
            rabbitmq_notifications_exchange_name,
            notifications_queue_capacity,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
