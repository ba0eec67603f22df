use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct AuthorFindEntity {
    pub _id: ObjectId,
    pub name: String,
}
