use super::super::entity::TicketFindEntity;
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: ObjectId,
    pub ticket: String,
    pub user_id: Uuid,
    pub issued_at: OffsetDateTime,
    pub expire_at: OffsetDateTime,
    pub used_at: Option<OffsetDateTime>,
}

impl From<TicketFindEntity> for Ticket {
    fn from(entity: TicketFindEntity) -> Self {
        Self {
            id: entity._id,
            ticket: entity.ticket,
            user_id: entity.user_id.into(),
            issued_at: entity.issued_at.into(),
            expire_at: entity.expire_at.into(),
            used_at: entity.used_at.map(OffsetDateTime::from),
        }
    }
}
