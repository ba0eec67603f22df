use super::{
    entity::{TicketFindEntity, TicketInsertEntity},
    Ticket, TicketsRepository,
};
use crate::repository::Error;
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use mongodb::{
    options::{IndexOptions, ReturnDocument},
    Database, IndexModel,
};
use std::time::Duration;
use time::OffsetDateTime;
use uuid::Uuid;

const TICKETS: &str = "tickets";
const INDEX_NAME_UNIQUE_TICKET: &str = "unique_ticket";
const INDEX_NAME_EXPIRE_AT: &str = "ttl_expire_at";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == TICKETS) {
            tracing::debug!(collection = TICKETS, "creating collection");
            database.create_collection(TICKETS).await?;
        }

        let collection = database.collection::<Document>(TICKETS);
        let index_names = collection.list_index_names().await?;

        if !index_names.iter().any(|name| name == INDEX_NAME_UNIQUE_TICKET) {
            let index = IndexModel::builder()
                .keys(doc! { "ticket": 1 })
                .options(
                    IndexOptions::builder()
                        .name(INDEX_NAME_UNIQUE_TICKET.to_string())
                        .unique(true)
                        .build(),
                )
                .build();
            collection.create_index(index).await?;
            tracing::debug!(index = INDEX_NAME_UNIQUE_TICKET, "created index");
        }

        // expired tickets are removed by the database
        if !index_names.iter().any(|name| name == INDEX_NAME_EXPIRE_AT) {
            let index = IndexModel::builder()
                .keys(doc! { "expire_at": 1 })
                .options(
                    IndexOptions::builder()
                        .name(INDEX_NAME_EXPIRE_AT.to_string())
                        .expire_after(Duration::ZERO)
                        .build(),
                )
                .build();
            collection.create_index(index).await?;
            tracing::debug!(index = INDEX_NAME_EXPIRE_AT, "created index");
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(
        &self,
        ticket: &str,
        user_id: Uuid,
        issued_at: OffsetDateTime,
        expire_at: OffsetDateTime,
    ) -> Result<ObjectId, Error> {
        let entity = TicketInsertEntity {
            ticket,
            user_id: user_id.into(),
            issued_at: issued_at.into(),
            expire_at: expire_at.into(),
            used_at: None,
        };

        let insert_result = self
            .database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(entity)
            .await?;

        match insert_result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            _ => Err(Error::InsertedIdType),
        }
    }

    async fn consume(&self, ticket: &str, now: OffsetDateTime) -> Result<Option<Ticket>, Error> {
        let now = DateTime::from(now);

        let consumed = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one_and_update(
                doc! {
                    "ticket": ticket,
                    "used_at": Bson::Null,
                    "expire_at": { "$gt": now },
                },
                doc! {
                    "$set": { "used_at": now },
                },
            )
            .return_document(ReturnDocument::After)
            .await?
            .map(Ticket::from);

        Ok(consumed)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::test::{create_test_database, destroy_test_database};

    fn millis(datetime: OffsetDateTime) -> OffsetDateTime {
        OffsetDateTime::from(DateTime::from(datetime))
    }

    #[tokio::test]
    async fn insert_values_unchanged() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = TicketsRepositoryImpl::new(database.clone()).await?;

        let user_id = Uuid::new_v4();
        let issued_at = OffsetDateTime::now_utc();
        let expire_at = issued_at + Duration::from_secs(30);

        let id = repository
            .insert("some ticket", user_id, issued_at, expire_at)
            .await?;

        let entity = database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! { "_id": id })
            .await?
            .unwrap();
        let ticket = Ticket::from(entity);

        assert_eq!(ticket.ticket, "some ticket");
        assert_eq!(ticket.user_id, user_id);
        assert_eq!(ticket.issued_at, millis(issued_at));
        assert_eq!(ticket.expire_at, millis(expire_at));
        assert_eq!(ticket.used_at, None);

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    async fn consume_marks_ticket_used() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = TicketsRepositoryImpl::new(database.clone()).await?;

        let user_id = Uuid::new_v4();
        let issued_at = OffsetDateTime::now_utc();
        repository
            .insert("ticket", user_id, issued_at, issued_at + Duration::from_secs(30))
            .await?;

        let now = OffsetDateTime::now_utc();
        let ticket = repository.consume("ticket", now).await?.unwrap();

        assert_eq!(ticket.user_id, user_id);
        assert_eq!(ticket.used_at, Some(millis(now)));

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    async fn consume_twice() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = TicketsRepositoryImpl::new(database.clone()).await?;

        let issued_at = OffsetDateTime::now_utc();
        repository
            .insert(
                "ticket",
                Uuid::new_v4(),
                issued_at,
                issued_at + Duration::from_secs(30),
            )
            .await?;

        let first = repository.consume("ticket", OffsetDateTime::now_utc()).await?;
        let second = repository.consume("ticket", OffsetDateTime::now_utc()).await?;

        assert!(first.is_some());
        assert!(second.is_none());

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    async fn consume_expired() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = TicketsRepositoryImpl::new(database.clone()).await?;

        let issued_at = OffsetDateTime::now_utc() - Duration::from_secs(60);
        repository
            .insert(
                "ticket",
                Uuid::new_v4(),
                issued_at,
                issued_at + Duration::from_secs(30),
            )
            .await?;

        let ticket = repository.consume("ticket", OffsetDateTime::now_utc()).await?;

        assert!(ticket.is_none());

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    async fn consume_not_exist() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = TicketsRepositoryImpl::new(database.clone()).await?;

        let ticket = repository
            .consume("ticket that does not exist", OffsetDateTime::now_utc())
            .await?;

        assert!(ticket.is_none());

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    async fn new_twice_on_same_database() -> anyhow::Result<()> {
        let database = create_test_database().await?;

        TicketsRepositoryImpl::new(database.clone()).await?;
        TicketsRepositoryImpl::new(database.clone()).await?;

        destroy_test_database(database).await;

        Ok(())
    }
}
