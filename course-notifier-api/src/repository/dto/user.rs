use super::super::entity::UserFindEntity;
use bson::oid::ObjectId;

#[derive(Debug, Clone)]
pub struct User {
    pub id: ObjectId,
    pub username: String,

    /// Argon2 PHC string
    pub password_hash: String,
    pub roles: Vec<String>,
}

impl From<UserFindEntity> for User {
    fn from(entity: UserFindEntity) -> Self {
        Self {
            id: entity._id,
            username: entity.username,
            password_hash: entity.password_hash,
            roles: entity.roles,
        }
    }
}
