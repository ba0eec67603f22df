use crate::auth::Permission;
use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RoleFindEntity {
    pub _id: ObjectId,
    pub name: String,

    #[serde(default)]
    pub permissions: Vec<Permission>,
}
