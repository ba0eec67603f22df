use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserFindEntity {
    pub _id: ObjectId,
    pub username: String,
    pub password_hash: String,

    #[serde(default)]
    pub roles: Vec<String>,
}
