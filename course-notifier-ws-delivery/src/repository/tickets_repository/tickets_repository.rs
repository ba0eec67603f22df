use super::Ticket;
use crate::repository::Error;
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    async fn insert(
        &self,
        ticket: &str,
        user_id: Uuid,
        issued_at: OffsetDateTime,
        expire_at: OffsetDateTime,
    ) -> Result<ObjectId, Error>;

    ///
    /// Atomically marks ticket as used at `now`.
    ///
    /// ### Returns
    /// Used ticket or None when ticket does not exist,
    /// had already been used or expired before `now`
    ///
    async fn consume(&self, ticket: &str, now: OffsetDateTime) -> Result<Option<Ticket>, Error>;
}
