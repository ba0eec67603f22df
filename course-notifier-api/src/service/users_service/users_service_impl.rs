use super::UsersService;
use crate::{
    dto::{input, output},
    error::Error,
    event::{DomainEventPublisher, OperationEvent},
    repository::{self, RolesRepository, TransactionManager, UsersRepository},
};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::User;
use notification_contract::{EntityType, OperationType};
use std::sync::Arc;

pub struct UsersServiceImpl {
    transaction_manager: Arc<dyn TransactionManager>,
    users_repository: Arc<dyn UsersRepository>,
    roles_repository: Arc<dyn RolesRepository>,
    event_publisher: Arc<DomainEventPublisher>,
}

impl UsersServiceImpl {
    pub fn new(
        transaction_manager: Arc<dyn TransactionManager>,
        users_repository: Arc<dyn UsersRepository>,
        roles_repository: Arc<dyn RolesRepository>,
        event_publisher: Arc<DomainEventPublisher>,
    ) -> Self {
        Self {
            transaction_manager,
            users_repository,
            roles_repository,
            event_publisher,
        }
    }

    fn parse_id(id: &str) -> Result<ObjectId, Error> {
        ObjectId::parse_str(id).map_err(|_| Error::UserNotExist)
    }

    ///
    /// Validates user and returns roles without duplicates
    ///
    async fn validate_user(&self, user: &input::User) -> Result<Vec<String>, Error> {
        if user.username.trim().is_empty() {
            return Err(Error::Validation("username must not be blank"));
        }

        let mut roles = Vec::with_capacity(user.roles.len());
        for role in &user.roles {
            if !roles.contains(role) {
                roles.push(role.clone());
            }
        }

        if !roles.is_empty() {
            let existing = self.roles_repository.count_existing_names(&roles).await?;
            if existing != roles.len() as u64 {
                return Err(Error::Validation("role not exist"));
            }
        }

        Ok(roles)
    }

    /// Argon2 is slow on purpose, so it runs outside of async workers
    async fn hash_password(password: String) -> Result<String, Error> {
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);

            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| Error::PasswordHash(err.to_string()))
        })
        .await
        .map_err(|err| Error::PasswordHash(err.to_string()))?
    }

    fn map_unique_violation(err: repository::Error) -> Error {
        match err {
            repository::Error::UniqueViolation => Error::UsernameTaken,
            err => Error::Database(err),
        }
    }
}

#[async_trait]
impl UsersService for UsersServiceImpl {
    async fn create_user(
        &self,
        user: &User,
        new_user: input::User,
    ) -> Result<output::User, Error> {
        tracing::info!("creating user");
        tracing::trace!(?new_user);

        let roles = self.validate_user(&new_user).await?;
        if new_user.password.trim().is_empty() {
            return Err(Error::Validation("password must not be blank"));
        }
        let password_hash = Self::hash_password(new_user.password).await?;

        let mut transaction = self.transaction_manager.begin().await?;
        let created_user = self
            .users_repository
            .insert(&mut transaction, &new_user.username, &password_hash, &roles)
            .await
            .map_err(Self::map_unique_violation)?;

        self.event_publisher.publish(
            &mut transaction,
            OperationEvent::new(
                EntityType::User,
                OperationType::Created,
                created_user.id.to_hex(),
                created_user.username.clone(),
                user.principal(),
            ),
        );
        transaction.commit().await?;

        tracing::info!(id = %created_user.id, "created user");

        Ok(output::User::from(created_user))
    }

    async fn update_user(
        &self,
        user: &User,
        id: &str,
        updated_user: input::User,
    ) -> Result<output::User, Error> {
        tracing::info!(id, "updating user");
        tracing::trace!(?updated_user);

        let id = Self::parse_id(id)?;
        let roles = self.validate_user(&updated_user).await?;
        let password_hash = match updated_user.password.trim().is_empty() {
            true => None,
            false => Some(Self::hash_password(updated_user.password).await?),
        };

        let mut transaction = self.transaction_manager.begin().await?;
        let saved_user = self
            .users_repository
            .update(
                &mut transaction,
                id,
                &updated_user.username,
                password_hash,
                &roles,
            )
            .await
            .map_err(Self::map_unique_violation)?
            .ok_or(Error::UserNotExist)?;

        self.event_publisher.publish(
            &mut transaction,
            OperationEvent::new(
                EntityType::User,
                OperationType::Updated,
                saved_user.id.to_hex(),
                saved_user.username.clone(),
                user.principal(),
            ),
        );
        transaction.commit().await?;

        tracing::info!("updated user");

        Ok(output::User::from(saved_user))
    }

    async fn delete_user(&self, user: &User, id: &str) -> Result<(), Error> {
        tracing::info!(id, "deleting user");

        let id = Self::parse_id(id)?;

        let mut transaction = self.transaction_manager.begin().await?;
        let deleted_user = self
            .users_repository
            .delete(&mut transaction, id)
            .await?
            .ok_or(Error::UserNotExist)?;

        self.event_publisher.publish(
            &mut transaction,
            OperationEvent::new(
                EntityType::User,
                OperationType::Deleted,
                deleted_user.id.to_hex(),
                deleted_user.username,
                user.principal(),
            ),
        );
        transaction.commit().await?;

        tracing::info!("deleted user");

        Ok(())
    }

    async fn find_user(&self, id: &str) -> Result<output::User, Error> {
        tracing::info!(id, "finding user");

        let id = Self::parse_id(id)?;
        let found_user = self
            .users_repository
            .find(id)
            .await?
            .ok_or(Error::UserNotExist)?;

        Ok(output::User::from(found_user))
    }

    async fn find_users(&self) -> Result<Vec<output::User>, Error> {
        tracing::info!("finding users");

        let users = self.users_repository.find_all().await?;
        tracing::info!(count = users.len(), "found users");

        let users = users.into_iter().map(output::User::from).collect();

        Ok(users)
    }
}
