use super::AuthorsService;
use crate::{
    dto::{input, output},
    error::Error,
    event::{DomainEventPublisher, OperationEvent},
    repository::{AuthorsRepository, TransactionManager},
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::User;
use notification_contract::{EntityType, OperationType};
use std::sync::Arc;

pub struct AuthorsServiceImpl {
    transaction_manager: Arc<dyn TransactionManager>,
    repository: Arc<dyn AuthorsRepository>,
    event_publisher: Arc<DomainEventPublisher>,
}

impl AuthorsServiceImpl {
    pub fn new(
        transaction_manager: Arc<dyn TransactionManager>,
        repository: Arc<dyn AuthorsRepository>,
        event_publisher: Arc<DomainEventPublisher>,
    ) -> Self {
        Self {
            transaction_manager,
            repository,
            event_publisher,
        }
    }

    fn parse_id(id: &str) -> Result<ObjectId, Error> {
        ObjectId::parse_str(id).map_err(|_| Error::AuthorNotExist)
    }

    fn validate_author(author: &input::Author) -> Result<(), Error> {
        if author.name.trim().is_empty() {
            return Err(Error::Validation("name must not be blank"));
        }

        Ok(())
    }
}

#[async_trait]
impl AuthorsService for AuthorsServiceImpl {
    async fn create_author(
        &self,
        user: &User,
        author: input::Author,
    ) -> Result<output::Author, Error> {
        tracing::info!("creating author");
        tracing::trace!(?author);

        Self::validate_author(&author)?;

        let mut transaction = self.transaction_manager.begin().await?;
        let author = self.repository.insert(&mut transaction, &author.name).await?;

        self.event_publisher.publish(
            &mut transaction,
            OperationEvent::new(
                EntityType::Author,
                OperationType::Created,
                author.id.to_hex(),
                author.name.clone(),
                user.principal(),
            ),
        );
        transaction.commit().await?;

        tracing::info!(id = %author.id, "created author");

        Ok(output::Author::from(author))
    }

    async fn update_author(
        &self,
        user: &User,
        id: &str,
        author: input::Author,
    ) -> Result<output::Author, Error> {
        tracing::info!(id, "updating author");
        tracing::trace!(?author);

        let id = Self::parse_id(id)?;
        Self::validate_author(&author)?;

        let mut transaction = self.transaction_manager.begin().await?;
        let author = self
            .repository
            .update(&mut transaction, id, &author.name)
            .await?
            .ok_or(Error::AuthorNotExist)?;

        self.event_publisher.publish(
            &mut transaction,
            OperationEvent::new(
                EntityType::Author,
                OperationType::Updated,
                author.id.to_hex(),
                author.name.clone(),
                user.principal(),
            ),
        );
        transaction.commit().await?;

        tracing::info!("updated author");

        Ok(output::Author::from(author))
    }

    async fn delete_author(&self, user: &User, id: &str) -> Result<(), Error> {
        tracing::info!(id, "deleting author");

        let id = Self::parse_id(id)?;

        let mut transaction = self.transaction_manager.begin().await?;
        let author = self
            .repository
            .delete(&mut transaction, id)
            .await?
            .ok_or(Error::AuthorNotExist)?;

        self.event_publisher.publish(
            &mut transaction,
            OperationEvent::new(
                EntityType::Author,
                OperationType::Deleted,
                author.id.to_hex(),
                author.name,
                user.principal(),
            ),
        );
        transaction.commit().await?;

        tracing::info!("deleted author");

        Ok(())
    }

    async fn find_author(&self, id: &str) -> Result<output::Author, Error> {
        tracing::info!(id, "finding author");

        let id = Self::parse_id(id)?;
        let author = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::AuthorNotExist)?;

        Ok(output::Author::from(author))
    }

    async fn find_authors(&self) -> Result<Vec<output::Author>, Error> {
        tracing::info!("finding authors");

        let authors = self.repository.find_all().await?;
        tracing::info!(count = authors.len(), "found authors");

        let authors = authors.into_iter().map(output::Author::from).collect();

        Ok(authors)
    }
}
