use crate::{
    dto::{input, output},
    error::Error,
    repository::Ticket,
};
use axum::async_trait;
use jwt_auth::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    async fn create_ticket(&self, user: &User) -> Result<output::WebSocketTicket, Error>;

    async fn consume_ticket(&self, ticket: input::WebSocketTicket) -> Result<Ticket, Error>;
}
