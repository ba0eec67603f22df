use super::{TicketsService, TicketsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{Ticket, TicketsRepository},
};
use axum::async_trait;
use jwt_auth::User;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(config: TicketsServiceConfig, repository: Arc<dyn TicketsRepository>) -> Self {
        Self { config, repository }
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    ///
    /// Issues a single-use ticket exchanged later for a WebSocket session
    ///
    async fn create_ticket(&self, user: &User) -> Result<output::WebSocketTicket, Error> {
        tracing::info!("creating ticket");

        let issued_at = OffsetDateTime::now_utc();
        let expire_at = issued_at + self.config.ticket_lifespan;
        let ticket = Uuid::new_v4().to_string();

        let id = self
            .repository
            .insert(&ticket, user.id, issued_at, expire_at)
            .await?;
        tracing::info!(%id, "created ticket");

        Ok(output::WebSocketTicket { ticket })
    }

    ///
    /// Consumes ticket to find out who opens the session
    ///
    /// ### Errors
    /// - [Error::TicketInvalid] when ticket does not exist,
    ///   had already been used or expired
    ///
    async fn consume_ticket(
        &self,
        input::WebSocketTicket { ticket }: input::WebSocketTicket,
    ) -> Result<Ticket, Error> {
        tracing::info!("consuming ticket");

        let ticket = self
            .repository
            .consume(&ticket, OffsetDateTime::now_utc())
            .await?
            .ok_or(Error::TicketInvalid("ticket not exist, used or expired"))?;
        tracing::info!(id = %ticket.id, user_id = %ticket.user_id, "consumed ticket");

        Ok(ticket)
    }
}
