use super::{Error, Transaction, User};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::UniqueViolation] when username is already taken
    ///
    async fn insert(
        &self,
        transaction: &mut Transaction,
        username: &str,
        password_hash: &str,
        roles: &[String],
    ) -> Result<User, Error>;

    ///
    /// Updates user. Password hash stays unchanged when None.
    ///
    /// ### Returns
    /// Updated user or None when user does not exist
    ///
    /// ### Errors
    /// - [Error::UniqueViolation] when username is already taken
    ///
    async fn update(
        &self,
        transaction: &mut Transaction,
        id: ObjectId,
        username: &str,
        password_hash: Option<String>,
        roles: &[String],
    ) -> Result<Option<User>, Error>;

    ///
    /// ### Returns
    /// Deleted user or None when user does not exist
    ///
    async fn delete(
        &self,
        transaction: &mut Transaction,
        id: ObjectId,
    ) -> Result<Option<User>, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<User>, Error>;

    async fn find_all(&self) -> Result<Vec<User>, Error>;
}
