use crate::{auth::Permission, repository};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub permissions: Vec<Permission>,
}

impl From<repository::Role> for Role {
    fn from(role: repository::Role) -> Self {
        Self {
            id: role.id.to_hex(),
            name: role.name,
            permissions: role.permissions,
        }
    }
}
