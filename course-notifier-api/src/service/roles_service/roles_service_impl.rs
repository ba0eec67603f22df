use super::RolesService;
use crate::{
    auth::Permission,
    dto::{input, output},
    error::Error,
    repository::{self, RolesRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use strum::IntoEnumIterator;

pub struct RolesServiceImpl {
    repository: Arc<dyn RolesRepository>,
}

impl RolesServiceImpl {
    pub fn new(repository: Arc<dyn RolesRepository>) -> Self {
        Self { repository }
    }

    fn parse_id(id: &str) -> Result<ObjectId, Error> {
        ObjectId::parse_str(id).map_err(|_| Error::RoleNotExist)
    }

    fn validate_role(role: &input::Role) -> Result<Vec<Permission>, Error> {
        if role.name.trim().is_empty() {
            return Err(Error::Validation("name must not be blank"));
        }

        let mut permissions = Vec::with_capacity(role.permissions.len());
        for permission in &role.permissions {
            if !permissions.contains(permission) {
                permissions.push(*permission);
            }
        }

        Ok(permissions)
    }

    fn map_unique_violation(err: repository::Error) -> Error {
        match err {
            repository::Error::UniqueViolation => Error::RoleNameTaken,
            err => Error::Database(err),
        }
    }
}

#[async_trait]
impl RolesService for RolesServiceImpl {
    async fn create_role(&self, role: input::Role) -> Result<output::Role, Error> {
        tracing::info!(name = %role.name, "creating role");

        let permissions = Self::validate_role(&role)?;
        let role = self
            .repository
            .insert(&role.name, &permissions)
            .await
            .map_err(Self::map_unique_violation)?;

        tracing::info!(id = %role.id, "created role");

        Ok(output::Role::from(role))
    }

    async fn update_role(&self, id: &str, role: input::Role) -> Result<output::Role, Error> {
        tracing::info!(id, "updating role");
        tracing::trace!(?role);

        let id = Self::parse_id(id)?;
        let permissions = Self::validate_role(&role)?;
        let role = self
            .repository
            .update(id, &role.name, &permissions)
            .await
            .map_err(Self::map_unique_violation)?
            .ok_or(Error::RoleNotExist)?;

        tracing::info!("updated role");

        Ok(output::Role::from(role))
    }

    async fn delete_role(&self, id: &str) -> Result<(), Error> {
        tracing::info!(id, "deleting role");

        let id = Self::parse_id(id)?;
        self.repository
            .delete(id)
            .await?
            .ok_or(Error::RoleNotExist)?;

        tracing::info!("deleted role");

        Ok(())
    }

    async fn find_role(&self, id: &str) -> Result<output::Role, Error> {
        tracing::info!(id, "finding role");

        let id = Self::parse_id(id)?;
        let role = self.repository.find(id).await?.ok_or(Error::RoleNotExist)?;

        Ok(output::Role::from(role))
    }

    async fn find_roles(&self) -> Result<Vec<output::Role>, Error> {
        tracing::info!("finding roles");

        let roles = self.repository.find_all().await?;
        tracing::info!(count = roles.len(), "found roles");

        Ok(roles.into_iter().map(output::Role::from).collect())
    }

    fn find_permissions(&self) -> Vec<Permission> {
        Permission::iter().collect()
    }
}
