use super::{Author, Error, Transaction};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorsRepository: Send + Sync {
    async fn insert(&self, transaction: &mut Transaction, name: &str) -> Result<Author, Error>;

    ///
    /// ### Returns
    /// Updated author or None when author does not exist
    ///
    async fn update(
        &self,
        transaction: &mut Transaction,
        id: ObjectId,
        name: &str,
    ) -> Result<Option<Author>, Error>;

    ///
    /// Deletes author and removes it from authors of all courses.
    ///
    /// ### Returns
    /// Deleted author or None when author does not exist
    ///
    async fn delete(
        &self,
        transaction: &mut Transaction,
        id: ObjectId,
    ) -> Result<Option<Author>, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Author>, Error>;

    async fn find_all(&self) -> Result<Vec<Author>, Error>;

    ///
    /// ### Returns
    /// Number of distinct ids that belong to existing authors
    ///
    async fn count_existing(&self, ids: &[ObjectId]) -> Result<u64, Error>;
}
