use std::time::Duration;

pub struct TicketsServiceConfig {
    pub ticket_lifespan: Duration,
}
