use crate::{
    auth::Permission,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

///
/// Roles group permissions under a name assigned to users.
/// Changes of roles are not announced.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RolesService: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::Validation] when name is blank
    /// - [Error::RoleNameTaken] when name is already used
    ///
    async fn create_role(&self, role: input::Role) -> Result<output::Role, Error>;

    ///
    /// ### Errors
    /// - [Error::RoleNotExist] when role does not exist
    /// - [Error::Validation] when name is blank
    /// - [Error::RoleNameTaken] when name is already used
    ///
    async fn update_role(&self, id: &str, role: input::Role) -> Result<output::Role, Error>;

    async fn delete_role(&self, id: &str) -> Result<(), Error>;

    async fn find_role(&self, id: &str) -> Result<output::Role, Error>;

    async fn find_roles(&self) -> Result<Vec<output::Role>, Error>;

    /// Every permission known to the application
    fn find_permissions(&self) -> Vec<Permission>;
}
