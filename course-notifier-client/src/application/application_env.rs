use anyhow::anyhow;
use std::time::Duration;

pub struct ApplicationEnv {
    /// host:port of the ws-delivery service
    pub api_address: String,
    pub access_token: String,
    pub topic: String,
    pub reconnect_delay: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let api_address = Self::env_var("COURSE_NOTIFIER_CLIENT_API_ADDRESS")?;
        let access_token = Self::env_var("COURSE_NOTIFIER_CLIENT_ACCESS_TOKEN")?;
        let topic = Self::env_var("COURSE_NOTIFIER_CLIENT_TOPIC")
            .unwrap_or_else(|_| "/topic/notifications".to_string());
        let reconnect_delay = match Self::env_var("COURSE_NOTIFIER_CLIENT_RECONNECT_DELAY") {
            Ok(delay) => delay.parse()?,
            Err(_) => 5000,
        };
        let reconnect_delay = Duration::from_millis(reconnect_delay);

        Ok(Self {
            api_address,
            access_token,
            topic,
            reconnect_delay,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
