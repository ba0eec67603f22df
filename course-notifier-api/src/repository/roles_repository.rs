use super::{Error, Role};
use crate::auth::Permission;
use axum::async_trait;
use bson::oid::ObjectId;

///
/// Roles are written outside of transactions,
/// their changes are not announced to anyone.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RolesRepository: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::UniqueViolation] when name is already taken
    ///
    async fn insert(&self, name: &str, permissions: &[Permission]) -> Result<Role, Error>;

    ///
    /// ### Returns
    /// Updated role or None when role does not exist
    ///
    /// ### Errors
    /// - [Error::UniqueViolation] when name is already taken
    ///
    async fn update(
        &self,
        id: ObjectId,
        name: &str,
        permissions: &[Permission],
    ) -> Result<Option<Role>, Error>;

    ///
    /// ### Returns
    /// Deleted role or None when role does not exist
    ///
    async fn delete(&self, id: ObjectId) -> Result<Option<Role>, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Role>, Error>;

    async fn find_all(&self) -> Result<Vec<Role>, Error>;

    ///
    /// ### Returns
    /// Number of distinct names that belong to existing roles
    ///
    async fn count_existing_names(&self, names: &[String]) -> Result<u64, Error>;
}
