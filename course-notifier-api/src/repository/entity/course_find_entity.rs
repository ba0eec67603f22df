use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CourseFindEntity {
    pub _id: ObjectId,
    pub title: String,
    pub description: String,
    pub creation_date: String,
    pub duration: i32,

    #[serde(default)]
    pub author_ids: Vec<ObjectId>,
}
