use super::super::entity::RoleFindEntity;
use crate::auth::Permission;
use bson::oid::ObjectId;

#[derive(Debug, Clone)]
pub struct Role {
    pub id: ObjectId,
    pub name: String,
    pub permissions: Vec<Permission>,
}

impl From<RoleFindEntity> for Role {
    fn from(entity: RoleFindEntity) -> Self {
        Self {
            id: entity._id,
            name: entity.name,
            permissions: entity.permissions,
        }
    }
}
