use super::super::entity::AuthorFindEntity;
use bson::oid::ObjectId;

#[derive(Debug, Clone)]
pub struct Author {
    pub id: ObjectId,
    pub name: String,
}

impl From<AuthorFindEntity> for Author {
    fn from(entity: AuthorFindEntity) -> Self {
        Self {
            id: entity._id,
            name: entity.name,
        }
    }
}
